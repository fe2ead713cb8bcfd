//! Document fetching
//!
//! HTTP GET for N-Triples documents. The response body is handed to the
//! pipeline untouched; status codes are carried through for the caller.

pub mod client;

pub use client::Fetcher;

use bytes::Bytes;
use thiserror::Error;

/// `Accept` header sent unless the caller overrides it
pub const DEFAULT_ACCEPT: &str = "*/*, application/n-triples";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// HTTP client could not be built
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request never produced a response
    #[error("GET {uri}: {message}")]
    Transport { uri: String, message: String },

    /// Server answered with something other than 200
    #[error("Received {status_code} status code from {uri}: {body}")]
    Status {
        status_code: u16,
        uri: String,
        body: String,
    },
}

impl FetchError {
    /// Status code of the response, if one was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Transport failures and 5xx responses are worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status_code, .. } => *status_code >= 500,
            FetchError::Config(_) => false,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// A single GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub uri: String,
    /// Per-request headers, sent after the configured defaults
    pub headers: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub uri: String,
    pub status_code: u16,
    pub body: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            status_code: 404,
            uri: "https://api.parliament.uk/x".to_string(),
            body: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Received 404 status code from https://api.parliament.uk/x: not found"
        );
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable() {
        let server_error = FetchError::Status {
            status_code: 503,
            uri: String::new(),
            body: String::new(),
        };
        let transport = FetchError::Transport {
            uri: "foo://a_broken.url".to_string(),
            message: "unsupported scheme".to_string(),
        };

        assert!(server_error.is_retryable());
        assert!(transport.is_retryable());
        assert_eq!(transport.status_code(), None);
        assert!(!FetchError::Config("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_request_builder() {
        let request = FetchRequest::new("https://example.org")
            .header("Access-Token", "1")
            .header("X-Trace", "2");
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers[0], ("Access-Token".to_string(), "1".to_string()));
    }
}
