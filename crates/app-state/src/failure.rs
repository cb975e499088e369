//! Failure classification
//!
//! Every failure a user action can hit falls into one of a handful of kinds.
//! Screens use the kind only to pick a generic message; the detailed error
//! goes to the log.

use app_core::{AuthError, EventError};
use event_client::ApiError;
use serde::{Deserialize, Serialize};

/// Kind of a user-facing failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// No response from the server
    Network,
    /// The server responded, but not with something usable (non-2xx or bad body)
    Http,
    /// Client-side check failed before any request
    Validation,
    /// Local storage failed
    Storage,
}

impl FailureKind {
    /// Classify an API error
    pub fn of_api(error: &ApiError) -> Self {
        match error {
            ApiError::Network(_) | ApiError::Config(_) => FailureKind::Network,
            ApiError::Http { .. } | ApiError::Decode(_) | ApiError::Encode(_) => FailureKind::Http,
            ApiError::InvalidEventId(_) => FailureKind::Validation,
        }
    }

    /// Classify an auth service error
    pub fn of_auth(error: &AuthError) -> Self {
        match error {
            AuthError::Api(api) => Self::of_api(api),
            AuthError::Storage(_) => FailureKind::Storage,
        }
    }

    /// Classify an event service error
    pub fn of_event(error: &EventError) -> Self {
        match error {
            EventError::Api(api) => Self::of_api(api),
        }
    }

    /// Short generic description
    pub fn describe(&self) -> &'static str {
        match self {
            FailureKind::Network => "Network request failed",
            FailureKind::Http => "Request failed",
            FailureKind::Validation => "Invalid input",
            FailureKind::Storage => "Could not access local storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_classification() {
        assert_eq!(
            FailureKind::of_api(&ApiError::Network("refused".to_string())),
            FailureKind::Network
        );
        assert_eq!(
            FailureKind::of_api(&ApiError::Http { status: 500, body: String::new() }),
            FailureKind::Http
        );
        assert_eq!(
            FailureKind::of_api(&ApiError::Decode("bad".to_string())),
            FailureKind::Http
        );
        assert_eq!(
            FailureKind::of_api(&ApiError::InvalidEventId("..".to_string())),
            FailureKind::Validation
        );
    }

    #[test]
    fn test_auth_classification() {
        let err = AuthError::Api(ApiError::Http { status: 401, body: String::new() });
        assert_eq!(FailureKind::of_auth(&err), FailureKind::Http);
    }
}
