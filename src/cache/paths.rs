//! Cache path utilities and constants

use std::path::{Path, PathBuf};

use crate::brand::BRAND_ID;
use crate::error::{Result, cache::operation_failed};

/// Cache subdirectory under `~/.sledgemc`
const CACHE_DIR: &str = "cache";

/// Subdirectory holding per-resource lock files
pub const LOCKS_DIR: &str = ".locks";

/// Default cache root: `~/.sledgemc/cache`
///
/// Can be overridden with the `SLEDGE_CACHE_DIR` environment variable.
pub fn default_cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var("SLEDGE_CACHE_DIR") {
        return Ok(PathBuf::from(cache_dir));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| operation_failed("Could not determine home directory"))?;

    Ok(home.join(format!(".{BRAND_ID}")).join(CACHE_DIR))
}

/// Lock file guarding one cache entry
pub fn lock_path(root: &Path, file_name: &str) -> PathBuf {
    root.join(LOCKS_DIR).join(format!("{file_name}.lock"))
}
