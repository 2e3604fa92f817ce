//! Asset cache for remote launcher artifacts
//!
//! Downloads the agent, API and per-version loader jars once and serves
//! them from disk afterwards.
//!
//! ## Cache Structure
//!
//! ```text
//! ~/.sledgemc/cache/
//! ├── sledge-agent-v1.0.0.jar
//! ├── sledge-api-v1.0.0.jar
//! ├── sledge-loader-<version>.jar
//! └── .locks/
//!     └── <file>.lock
//! ```
//!
//! A file at its final path is always a complete download: bytes are
//! streamed into a temporary file in the cache root and renamed into place
//! only after the transfer finished. Entries are never evicted.

pub mod asset;
pub mod fetch;
pub mod lock;
pub mod paths;
pub mod stats;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::brand::LOG_PREFIX;
use crate::error::{
    Result,
    cache::{fetch_failed, operation_failed},
};
use crate::sink::LogSink;

pub use asset::{Asset, DEFAULT_REPOSITORY_URL};
pub use fetch::{Fetcher, HttpFetcher};
pub use paths::default_cache_dir;
pub use stats::{cache_stats, list_cached_assets};

use lock::ResourceLock;

/// How concurrent `ensure` calls for the same resource are coordinated
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockPolicy {
    /// Exclusive file lock per resource; only one caller downloads
    #[default]
    PerResource,
    /// No lock; concurrent callers may each download, atomic rename keeps
    /// the final file intact
    Unlocked,
}

/// Disk cache of named remote artifacts
pub struct AssetCache {
    root: PathBuf,
    repository_url: String,
    fetcher: Arc<dyn Fetcher>,
    lock_policy: LockPolicy,
}

impl AssetCache {
    /// Cache rooted at `root`, downloading through `fetcher`
    pub fn new(root: impl Into<PathBuf>, fetcher: impl Fetcher + 'static) -> Self {
        Self {
            root: root.into(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            fetcher: Arc::new(fetcher),
            lock_policy: LockPolicy::default(),
        }
    }

    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = url.into();
        self
    }

    #[allow(dead_code)]
    pub fn with_lock_policy(mut self, policy: LockPolicy) -> Self {
        self.lock_policy = policy;
        self
    }

    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[allow(dead_code)]
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    /// Final cache path for an asset, whether or not it exists yet
    #[allow(dead_code)]
    pub fn path_for(&self, asset: &Asset) -> PathBuf {
        self.root.join(asset.cache_file_name())
    }

    /// Ensure an asset is cached, downloading it from the repository if needed
    pub fn ensure(&self, asset: &Asset, sink: &LogSink) -> Result<PathBuf> {
        let url = asset.url(&self.repository_url);
        self.ensure_from(asset, &url, sink)
    }

    #[allow(dead_code)]
    pub fn ensure_agent(&self, sink: &LogSink) -> Result<PathBuf> {
        self.ensure(&Asset::Agent, sink)
    }

    #[allow(dead_code)]
    pub fn ensure_api(&self, sink: &LogSink) -> Result<PathBuf> {
        self.ensure(&Asset::Api, sink)
    }

    pub fn ensure_loader(&self, version: &str, sink: &LogSink) -> Result<PathBuf> {
        self.ensure(&Asset::loader(version), sink)
    }

    /// Ensure an asset is cached, downloading it from `source_url` if needed.
    ///
    /// A cache hit performs no network access.
    pub fn ensure_from(&self, asset: &Asset, source_url: &str, sink: &LogSink) -> Result<PathBuf> {
        let file_name = asset.cache_file_name();
        let target = self.path_for(asset);

        if target.is_file() {
            sink.line(format!(
                "{LOG_PREFIX} Using cached {file_name}: {}",
                target.display()
            ));
            return Ok(target);
        }

        fs::create_dir_all(&self.root).map_err(|e| {
            operation_failed(format!(
                "Failed to create cache directory {}: {e}",
                self.root.display()
            ))
        })?;

        let _guard = match self.lock_policy {
            LockPolicy::PerResource => Some(ResourceLock::acquire(&paths::lock_path(
                &self.root, &file_name,
            ))?),
            LockPolicy::Unlocked => None,
        };

        // Another caller may have finished the download while we waited
        if target.is_file() {
            sink.line(format!(
                "{LOG_PREFIX} Using cached {file_name}: {}",
                target.display()
            ));
            return Ok(target);
        }

        sink.line(format!("{LOG_PREFIX} Downloading remote {file_name}..."));
        let bytes = self.download(asset, source_url, &target)?;
        tracing::debug!(%asset, url = source_url, bytes, "download complete");
        sink.line(format!(
            "{LOG_PREFIX} {file_name} downloaded successfully to: {}",
            target.display()
        ));

        Ok(target)
    }

    /// Stream into a temp file next to `target`, then rename over it
    fn download(&self, asset: &Asset, url: &str, target: &Path) -> Result<u64> {
        let fetch_error = |reason: String| fetch_failed(asset.to_string(), url, reason);

        let mut temp = NamedTempFile::new_in(&self.root)
            .map_err(|e| fetch_error(format!("cannot create temporary file: {e}")))?;

        let bytes = self
            .fetcher
            .fetch(url, temp.as_file_mut())
            .map_err(|e| fetch_error(e.to_string()))?;

        temp.as_file_mut()
            .flush()
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| fetch_error(format!("cannot flush download: {e}")))?;

        temp.persist(target)
            .map_err(|e| fetch_error(format!("cannot move download into place: {}", e.error)))?;

        Ok(bytes)
    }
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("root", &self.root)
            .field("repository_url", &self.repository_url)
            .field("lock_policy", &self.lock_policy)
            .finish_non_exhaustive()
    }
}
