//! Fetching raw word-list resources.
//!
//! A location is either an `http(s)://` URL, a `file://` URL or a plain path.
//! Relative locations are resolved against `StudioConfig::base_url` when one is
//! configured, and against `StudioConfig::base_dir` otherwise.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

use crate::{Error, Result, StudioConfig};

/// Data-loading collaborator used by the word-list loader.
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the raw bytes stored at `location`.
    fn fetch(&self, location: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Where a location string ended up pointing after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLocation {
    Remote(Url),
    Local(PathBuf),
}

/// Default fetcher: HTTP(S) through `reqwest`, everything else from disk.
pub struct ResourceLoader {
    client: Client,
    user_agent: String,
    base_url: Option<Url>,
    base_dir: PathBuf,
}

impl ResourceLoader {
    pub fn new(config: &StudioConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = match &config.base_url {
            Some(raw) => Some(
                Url::parse(raw)
                    .map_err(|e| Error::ConfigError(format!("invalid base URL '{}': {}", raw, e)))?,
            ),
            None => None,
        };

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            base_url,
            base_dir: config.base_dir.clone(),
        })
    }

    /// Resolve a location string without fetching it.
    pub fn resolve(&self, location: &str) -> Result<ResolvedLocation> {
        if let Ok(url) = Url::parse(location) {
            return match url.scheme() {
                "http" | "https" => Ok(ResolvedLocation::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(ResolvedLocation::Local)
                    .map_err(|_| Error::LoadError(format!("invalid file URL '{}'", location))),
                other => Err(Error::LoadError(format!(
                    "unsupported scheme '{}' in '{}'",
                    other, location
                ))),
            };
        }

        if let Some(base) = &self.base_url {
            let joined = base
                .join(location)
                .map_err(|e| Error::LoadError(format!("cannot resolve '{}': {}", location, e)))?;
            return Ok(ResolvedLocation::Remote(joined));
        }

        Ok(ResolvedLocation::Local(self.base_dir.join(location)))
    }

    async fn fetch_remote(&self, url: Url) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url.clone())
            .header("User-Agent", self.user_agent.clone())
            .send()
            .await
            .map_err(|e| Error::LoadError(format!("Failed to fetch {}: {}", url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::LoadError(format!("{} returned HTTP {}", url, status)));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::LoadError(format!("Failed to read response body: {}", e)))?;
        Ok(body.to_vec())
    }
}

impl ResourceFetcher for ResourceLoader {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        match self.resolve(location)? {
            ResolvedLocation::Remote(url) => {
                debug!("fetching {} over http", url);
                self.fetch_remote(url).await
            }
            ResolvedLocation::Local(path) => {
                debug!("reading {}", path.display());
                tokio::fs::read(&path)
                    .await
                    .map_err(|e| Error::LoadError(format!("Failed to read {}: {}", path.display(), e)))
            }
        }
    }
}
