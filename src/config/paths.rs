//! Platform default locations

use std::path::PathBuf;

use crate::brand::{BRAND, BRAND_ID};

const CONFIG_FILE: &str = "config.json";

/// Default configuration file
///
/// Can be overridden with the `SLEDGE_CONFIG` environment variable.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("SLEDGE_CONFIG") {
        return PathBuf::from(path);
    }

    // Lowercase on Linux, branded directory elsewhere
    let dir_name = if cfg!(any(target_os = "windows", target_os = "macos")) {
        BRAND
    } else {
        BRAND_ID
    };

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(dir_name)
        .join(CONFIG_FILE)
}

/// Where the official launcher keeps the game on this platform
pub fn default_install_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        // %APPDATA%\.minecraft
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".minecraft")
    } else if cfg!(target_os = "macos") {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("minecraft")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".minecraft")
    }
}
