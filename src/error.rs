// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// One HTTP GET that did not produce a usable body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Why a card page produced no record. The caller skips the event.
#[derive(Debug, Error)]
pub enum ExtractionFailure {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not parse {url}: {reason}")]
    Parse { url: String, reason: String },
}

impl ExtractionFailure {
    /// The page the failure came from, when known.
    pub fn url(&self) -> Option<&str> {
        match self {
            ExtractionFailure::Fetch(FetchError::Client(_)) => None,
            ExtractionFailure::Fetch(
                FetchError::Transport { url, .. }
                | FetchError::Status { url, .. }
                | FetchError::Body { url, .. },
            ) => Some(url),
            ExtractionFailure::Parse { url, .. } => Some(url),
        }
    }
}

/// Reading or writing a JSON file on disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: invalid JSON: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io { path: path.into(), source }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {value:?}: {source}")]
    BaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failures that stop a whole stage before it starts iterating.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("manifest unavailable: {0}")]
    Manifest(#[source] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extraction(#[from] ExtractionFailure),
    #[error(transparent)]
    Store(#[from] StoreError),
}
