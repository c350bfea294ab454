//! Error types for streamcheck.
//!
//! Every stage of a run reports through [`Error`]. Nothing is retried: the
//! first error aborts the run before any report is published.

use thiserror::Error;

/// Result type alias for streamcheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a streaming report
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid settings
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure or non-success status from a remote service
    #[error("network error ({service}): {message}")]
    Network {
        /// Which collaborator failed (radarr, tmdb, microbin, discord)
        service: &'static str,
        /// What went wrong
        message: String,
    },

    /// Response body did not have the expected structure
    #[error("unexpected data from {service}: {message}")]
    DataShape {
        /// Which collaborator sent the payload
        service: &'static str,
        /// What did not match
        message: String,
    },

    /// Report file could not be written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Summary could not be serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error for the given service
    pub fn network(service: &'static str, msg: impl Into<String>) -> Self {
        Self::Network {
            service,
            message: msg.into(),
        }
    }

    /// Create a data shape error for the given service
    pub fn data_shape(service: &'static str, msg: impl Into<String>) -> Self {
        Self::DataShape {
            service,
            message: msg.into(),
        }
    }

    /// Wrap a reqwest error raised while talking to `service`
    pub(crate) fn from_reqwest(service: &'static str, err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::data_shape(service, err.to_string())
        } else {
            Self::network(service, err.to_string())
        }
    }
}
