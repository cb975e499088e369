//! NexEvent API Client Library
//!
//! This crate provides the HTTP plumbing for talking to the NexEvent REST API:
//! a JSON HTTP client bound to a fixed base address, the wire types for the
//! auth and events endpoints, and a thin typed wrapper over those endpoints.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod http;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use api::NexEventApi;
pub use http::{ApiClient, ApiClientConfig, ApiRequest, ApiResponse};
pub use types::{Event, EventId, LoginResponse, User};

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error types for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error ({status}): {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A 2xx response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// A request body could not be encoded
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The HTTP client could not be built from its configuration
    #[error("Client configuration error: {0}")]
    Config(String),

    /// The event id cannot be addressed as a single path segment
    #[error("Invalid event id: {0:?}")]
    InvalidEventId(String),
}

impl ApiError {
    /// HTTP status code, when the server responded
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the request failed without any response from the server
    pub fn is_network_error(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
        assert!(err.is_network_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_http_error_status() {
        let err = ApiError::Http { status: 401, body: "{}".to_string() };
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_network_error());
        assert!(err.to_string().contains("401"));
    }
}
