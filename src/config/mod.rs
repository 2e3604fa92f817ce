//! Launcher configuration (`config.json`)
//!
//! A small camelCase JSON document remembering where the game lives and
//! which version was used last. Loading never fails: an absent or malformed
//! file yields the platform defaults.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{
    Result,
    config::{invalid, parse_failed, read_failed, write_failed},
};

pub use paths::{default_config_path, default_install_dir};

/// Host version used when nothing was launched yet
pub const DEFAULT_VERSION: &str = "1.21.11";

/// Default JVM heap allocation in megabytes
pub const DEFAULT_MEMORY_MB: u32 = 4096;

/// Keys accepted by [`LaunchConfig::set`]
pub const KEYS: [&str; 5] = [
    "installDir",
    "modsDir",
    "lastVersion",
    "allocatedMemoryMb",
    "javaPath",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchConfig {
    pub install_dir: PathBuf,
    pub mods_dir: PathBuf,
    pub last_version: String,
    /// Stored for the user's reference; launch flags are fixed
    pub allocated_memory_mb: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_path: Option<PathBuf>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        let install_dir = default_install_dir();
        Self {
            mods_dir: install_dir.join("mods"),
            install_dir,
            last_version: DEFAULT_VERSION.to_string(),
            allocated_memory_mb: DEFAULT_MEMORY_MB,
            java_path: None,
        }
    }
}

impl LaunchConfig {
    /// Load from `path`, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Load from `path`; an absent file is not an error
    pub fn try_load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| read_failed(path, e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| parse_failed(path, e.to_string()))
    }

    /// Write as pretty JSON, creating the parent directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_failed(path, e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(self).map_err(|e| write_failed(path, e.to_string()))?;
        fs::write(path, format!("{json}\n")).map_err(|e| write_failed(path, e.to_string()))
    }

    /// Set one field by its JSON key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "installDir" => self.install_dir = PathBuf::from(value),
            "modsDir" => self.mods_dir = PathBuf::from(value),
            "lastVersion" => {
                crate::brand::validate_version(value)?;
                self.last_version = value.to_string();
            }
            "allocatedMemoryMb" => {
                self.allocated_memory_mb = value
                    .parse()
                    .ok()
                    .filter(|mb| *mb > 0)
                    .ok_or_else(|| {
                        invalid(format!(
                            "allocatedMemoryMb must be a positive integer, got '{value}'"
                        ))
                    })?;
            }
            "javaPath" => {
                self.java_path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => {
                return Err(invalid(format!(
                    "unknown key '{key}' (expected one of: {})",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
