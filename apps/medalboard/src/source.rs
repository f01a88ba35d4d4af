//! # Data Source
//!
//! Where the static dataset comes from: a local JSON file or an HTTP GET of a
//! fixed URL. One fetch per view activation, no caching, no retries.

use crate::error::AppError;
use medalboard_core::{CountryRecord, parse_dataset};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Location of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http(String),
}

impl DataSource {
    /// Interpret a `--data` argument: `http://` and `https://` are URLs,
    /// anything else is a file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Http(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Fetch the raw bytes.
    pub async fn fetch_bytes(&self) -> Result<Vec<u8>, AppError> {
        match self {
            Self::File(path) => {
                debug!(path = %path.display(), "reading dataset file");
                Ok(tokio::fs::read(path).await?)
            }
            Self::Http(url) => {
                debug!(%url, "fetching dataset");
                let response = reqwest::get(url).await?.error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
        }
    }

    /// Fetch and decode the country collection.
    pub async fn fetch(&self) -> Result<Vec<CountryRecord>, AppError> {
        let bytes = self.fetch_bytes().await?;
        Ok(parse_dataset(&bytes)?)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
