//! Brand identity and host version naming
//!
//! Every name the launcher injects into the game (profile ids, system
//! properties, the bootstrap class) is derived from the constants here.

use crate::error::{Result, launch::invalid_version};

/// Display brand used in profile ids and launcher properties
pub const BRAND: &str = "SledgeMC";

/// Lowercase brand used for on-disk directories (e.g. `~/.sledgemc`)
pub const BRAND_ID: &str = "sledgemc";

/// Version reported to the game through `minecraft.launcher.version`
pub const LAUNCHER_VERSION: &str = "1.0.0";

/// Main class that takes over game startup
pub const BOOTSTRAP_CLASS: &str = "sledgemc.dev.loader.SledgeBootstrap";

/// Prefix for log lines emitted by the install and launch pipelines
pub const LOG_PREFIX: &str = "[SledgeMC]";

/// Profile id for a host version: `SledgeMC-<version>`
pub fn profile_name(version: &str) -> String {
    format!("{BRAND}-{version}")
}

/// Reject host versions that cannot safely be used as a path segment.
///
/// Versions end up in cache file names, library paths and profile
/// directories, so anything that could escape those directories is refused.
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(invalid_version(version, "version is empty"));
    }
    if version == "." || version.contains("..") {
        return Err(invalid_version(version, "contains a relative path component"));
    }
    if version.contains(['/', '\\']) {
        return Err(invalid_version(version, "contains a path separator"));
    }
    if version.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid_version(version, "contains whitespace"));
    }
    Ok(())
}
