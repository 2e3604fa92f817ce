//! Per-resource advisory locks
//!
//! Two launchers (or two threads) asking for the same missing asset would
//! otherwise both download it. An exclusive lock on a sibling `.lock` file
//! makes the second caller wait and then find the finished download.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{Result, cache::operation_failed};

/// Held exclusive lock; released on drop
#[derive(Debug)]
pub struct ResourceLock {
    file: File,
    path: PathBuf,
}

impl ResourceLock {
    /// Block until the lock at `path` is acquired, creating it if needed
    pub fn acquire(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                operation_failed(format!(
                    "Failed to create lock directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| {
                operation_failed(format!("Failed to open lock {}: {e}", path.display()))
            })?;

        tracing::debug!(lock = %path.display(), "waiting for cache lock");
        file.lock_exclusive()
            .map_err(|e| operation_failed(format!("Failed to lock {}: {e}", path.display())))?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }
}

impl Drop for ResourceLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(lock = %self.path.display(), error = %e, "failed to release cache lock");
        }
    }
}
