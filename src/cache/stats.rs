//! Cache statistics and listing

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, cache::operation_failed};

/// One cached artifact
#[derive(Debug, Clone)]
pub struct CachedAsset {
    /// Cache file name (e.g. sledge-loader-1.21.4.jar)
    pub name: String,
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

impl CachedAsset {
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Cache statistics
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of cached jars
    pub assets: usize,
    /// Total size in bytes
    pub total_size: u64,
}

impl CacheStats {
    /// Format total size as human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{bytes} B")
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}

/// List cached jars under `root`, sorted by name
pub fn list_cached_assets(root: &Path) -> Result<Vec<CachedAsset>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(root)
        .map_err(|e| operation_failed(format!("Failed to read cache directory: {e}")))?;

    let mut assets = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| operation_failed(format!("Failed to read cache entry: {e}")))?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "jar") {
            continue;
        }
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        assets.push(CachedAsset {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            size,
        });
    }

    assets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(assets)
}

/// Aggregate statistics for the cache at `root`
pub fn cache_stats(root: &Path) -> Result<CacheStats> {
    let assets = list_cached_assets(root)?;
    Ok(CacheStats {
        assets: assets.len(),
        total_size: assets.iter().map(|a| a.size).sum(),
    })
}
