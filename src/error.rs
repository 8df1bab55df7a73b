//! Error types for seoprobe.
//!
//! Every failure is one of a small closed set of kinds (see [`ErrorKind`]).
//! Network failures never abort a run: collectors render them into the
//! `issues` list of their section. Serialization and write failures end the
//! run with a non-zero exit code, as does anything unexpected.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The closed set of failure categories a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Serialization,
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The site could not be reached, or answered in a way we could not read.
    #[error("Site unreachable ({url}): {message}")]
    Network { url: String, message: String },

    /// The report could not be turned into JSON.
    #[error("Could not serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The report file could not be created or written.
    #[error("Could not write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is missing or malformed.
    #[error("{0}")]
    Config(String),

    /// Collection was cancelled with Ctrl-C.
    #[error("Interrupted before the report was written")]
    Interrupted,

    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    pub fn network(url: &str, err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        Error::Network {
            url: url.to_string(),
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network { .. } => ErrorKind::Network,
            Error::Serialization(_) | Error::Write { .. } => ErrorKind::Serialization,
            Error::Config(_) | Error::Interrupted | Error::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
