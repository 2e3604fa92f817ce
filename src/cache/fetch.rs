//! Network access for the asset cache
//!
//! The cache only needs "copy the bytes at this URL into this writer", so
//! that is all [`Fetcher`] asks for. [`HttpFetcher`] is the real
//! implementation; tests substitute in-memory fetchers.

use std::io::{self, Write};
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, cache::operation_failed};
use crate::progress::DownloadProgress;

/// Source of remote bytes
pub trait Fetcher: Send + Sync {
    /// Stream the resource at `url` into `dest`, returning the byte count
    fn fetch(&self, url: &str, dest: &mut dyn Write) -> io::Result<u64>;
}

/// Blocking HTTP(S) fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    show_progress: bool,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sledge/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| operation_failed(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            show_progress: false,
        })
    }

    /// Draw a progress bar on stderr while downloading
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &mut dyn Write) -> io::Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(io::Error::other)?;

        if !self.show_progress {
            return io::copy(&mut response, dest);
        }

        let file_name = url.rsplit('/').next().unwrap_or(url);
        let progress = DownloadProgress::new(file_name, response.content_length());
        let mut reader = progress.bar().wrap_read(response);
        match io::copy(&mut reader, dest) {
            Ok(bytes) => {
                progress.finish();
                Ok(bytes)
            }
            Err(e) => {
                progress.abandon();
                Err(e)
            }
        }
    }
}
