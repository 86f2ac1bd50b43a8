//! Failure taxonomy for talking to the analysis server

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Analysis client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Upload target is missing
    #[error("Audio file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Server could not be reached
    #[error("Could not connect to {url}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No answer within the configured timeout
    #[error("Request to {url} timed out after {secs} seconds")]
    Timeout { url: String, secs: u64 },

    /// Server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// Server answered `{"success": false, "message": ...}`
    #[error("Server returned error: {0}")]
    ServerReported(String),

    /// Health endpoint answered, but not with `"healthy"`
    #[error("Server reports unhealthy status: {0}")]
    Unhealthy(String),

    /// Body was not the JSON we expected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Any other HTTP client failure
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Classify a transport error for the request to `url`
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            ClientError::Timeout {
                url: url.to_string(),
                secs: timeout.as_secs(),
            }
        } else if err.is_connect() {
            ClientError::Connection {
                url: url.to_string(),
                source: err,
            }
        } else {
            ClientError::Request(err)
        }
    }

    /// Response body of an HTTP status failure
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ClientError::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}
