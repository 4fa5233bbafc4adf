//! The on-disk metadata catalog cache.
//!
//! The catalog rarely changes, so an existing cache file is trusted as-is;
//! there is no staleness check. Passing `override` forces a re-fetch.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::StoreError;
use fontgrab_core::Metadata;
use fontgrab_fetch::{fetch_metadata, HttpClient};

/// Guard prefix the metadata endpoint has historically put before its JSON
/// body.
const XSSI_PREFIX: &str = ")]}'";

/// The persisted catalog cache at a fixed path.
#[derive(Debug, Clone)]
pub struct MetadataCache {
    path: PathBuf,
}

impl MetadataCache {
    /// Creates a cache handle for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the cache file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Ensures the cache is populated.
    ///
    /// Does nothing when the file already exists and `override_existing` is
    /// false. Otherwise fetches the catalog, strips the XSSI guard prefix
    /// if present, and writes the body as pretty-printed JSON, creating
    /// parent directories as needed.
    pub async fn refresh(
        &self,
        client: &HttpClient,
        override_existing: bool,
    ) -> Result<(), StoreError> {
        if !override_existing && self.exists() {
            debug!(path = %self.path.display(), "Metadata cache exists, reusing");
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = fetch_metadata(client).await?;
        tokio::fs::write(&self.path, normalize_body(&body)?).await?;
        info!(path = %self.path.display(), "Wrote metadata cache");
        Ok(())
    }

    /// Reads and decodes the persisted catalog.
    pub async fn load(&self) -> Result<Metadata, StoreError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Strips the guard prefix if present and pretty-prints the catalog JSON.
fn normalize_body(body: &str) -> Result<String, serde_json::Error> {
    let body = body.strip_prefix(XSSI_PREFIX).unwrap_or(body);
    let catalog: Value = serde_json::from_str(body.trim_start())?;
    serde_json::to_string_pretty(&catalog)
}
