use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("PID cannot be empty.")]
    EmptyPid,

    #[error("Network Error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP Error {status}: {reason} ({url})")]
    Http {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("JSON Decode Error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Io Error at {}: {source}", path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Reasons an item record cannot yield a list of pages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No relations found in parent data.")]
    NoRelations,
    #[error("No child items found in parent data.")]
    NoChildren,
    #[error("No valid child PIDs found.")]
    NoValidChildren,
}

impl Error {
    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        Error::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Fs {
            path: path.into(),
            source,
        }
    }

    /// HTTP status code if this is an `Http` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
