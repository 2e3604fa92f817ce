//! Command helper utilities

use std::path::PathBuf;

use console::Term;

use crate::cache::{AssetCache, DEFAULT_REPOSITORY_URL, HttpFetcher, default_cache_dir};
use crate::config::{LaunchConfig, default_config_path};
use crate::error::Result;

/// Settings shared by every command, resolved from global options
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    pub config: LaunchConfig,
    pub cache_dir: Option<PathBuf>,
    pub repository: Option<String>,
}

impl Context {
    /// Load the configuration and remember the cache overrides
    pub fn new(
        config_path: Option<PathBuf>,
        cache_dir: Option<PathBuf>,
        repository: Option<String>,
    ) -> Self {
        let config_path = config_path.unwrap_or_else(default_config_path);
        let config = LaunchConfig::load(&config_path);
        Self {
            config_path,
            config,
            cache_dir,
            repository,
        }
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        match &self.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_cache_dir(),
        }
    }

    /// Asset cache downloading over HTTP, with a progress bar on a terminal
    pub fn asset_cache(&self) -> Result<AssetCache> {
        let fetcher = HttpFetcher::new()?.with_progress(Term::stderr().is_term());
        let repository = self
            .repository
            .clone()
            .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string());
        Ok(AssetCache::new(self.cache_dir()?, fetcher).with_repository_url(repository))
    }

    /// Persist the configuration; failures only warn
    pub fn save_config(&self) {
        if let Err(e) = self.config.save(&self.config_path) {
            tracing::warn!(error = %e, "configuration not saved");
            eprintln!("Warning: {e}");
        }
    }
}
