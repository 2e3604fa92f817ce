//! Test fixtures shared by the unit tests.
//!
//! - [`StaticFetcher`]: an in-memory artifact repository that counts requests
//! - [`GameDir`]: a temporary Minecraft directory with vanilla versions
//! - [`test_cache`]: an [`AssetCache`] wired to a [`StaticFetcher`]

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tempfile::TempDir;

use crate::cache::{Asset, AssetCache, Fetcher};

/// Repository base used by test caches
pub const TEST_REPOSITORY: &str = "http://repository.test/maven";

enum Response {
    Bytes(Vec<u8>),
    /// Write these bytes, then fail
    Truncated(Vec<u8>),
}

/// In-memory fetcher keyed by URL
#[derive(Clone, Default)]
pub struct StaticFetcher {
    responses: Arc<HashMap<String, Response>>,
    requests: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `bytes` for an asset under [`TEST_REPOSITORY`]
    pub fn serve(mut self, asset: &Asset, bytes: &[u8]) -> Self {
        Arc::get_mut(&mut self.responses)
            .expect("configure fetcher before cloning")
            .insert(asset.url(TEST_REPOSITORY), Response::Bytes(bytes.to_vec()));
        self
    }

    /// Serve part of the bytes for an asset, then fail the transfer
    pub fn truncate(mut self, asset: &Asset, partial: &[u8]) -> Self {
        Arc::get_mut(&mut self.responses)
            .expect("configure fetcher before cloning")
            .insert(
                asset.url(TEST_REPOSITORY),
                Response::Truncated(partial.to_vec()),
            );
        self
    }

    /// Sleep before answering each request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches performed so far
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str, dest: &mut dyn Write) -> io::Result<u64> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match self.responses.get(url) {
            Some(Response::Bytes(bytes)) => {
                dest.write_all(bytes)?;
                Ok(bytes.len() as u64)
            }
            Some(Response::Truncated(partial)) => {
                dest.write_all(partial)?;
                Err(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "connection reset mid-transfer",
                ))
            }
            None => Err(io::Error::other(format!("HTTP status 404 Not Found for {url}"))),
        }
    }
}

/// Cache in a fresh temp dir backed by `fetcher`
pub fn test_cache(fetcher: &StaticFetcher) -> (TempDir, AssetCache) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let cache = AssetCache::new(temp.path().join("cache"), fetcher.clone())
        .with_repository_url(TEST_REPOSITORY);
    (temp, cache)
}

/// Fetcher serving all three artifacts for `version`
pub fn full_repository(version: &str) -> StaticFetcher {
    StaticFetcher::new()
        .serve(&Asset::loader(version), b"loader-bytes")
        .serve(&Asset::Agent, b"agent-bytes")
        .serve(&Asset::Api, b"api-bytes")
}

/// Temporary Minecraft directory
pub struct GameDir {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl GameDir {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join(".minecraft");
        fs::create_dir_all(&path).expect("Failed to create game directory");
        Self { temp, path }
    }

    /// Write the vanilla jar for `version`
    pub fn with_version_jar(self, version: &str) -> Self {
        self.write(&format!("versions/{version}/{version}.jar"), b"vanilla-jar");
        self
    }

    /// Write the vanilla descriptor for `version`
    pub fn with_descriptor(self, version: &str, json: &str) -> Self {
        self.write(
            &format!("versions/{version}/{version}.json"),
            json.as_bytes(),
        );
        self
    }

    /// Write an arbitrary file under `libraries/`
    pub fn with_library(self, relative: &str) -> Self {
        self.write(&format!("libraries/{relative}"), b"lib");
        self
    }

    pub fn write(&self, relative: &str, bytes: &[u8]) {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, bytes).expect("Failed to write file");
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    pub fn root(&self) -> &Path {
        &self.path
    }
}
