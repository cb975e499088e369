//! Typed wrapper over the NexEvent REST endpoints
//!
//! # Example
//!
//! ```rust,no_run
//! use event_client::{ApiClientConfig, NexEventApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = NexEventApi::new(ApiClientConfig::new("http://localhost:8000"))?;
//!
//!     for event in api.list_events().await? {
//!         println!("{} - {}", event.id, event.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::http::{ApiClient, ApiClientConfig};
use crate::types::{Event, EventId, LoginRequest, LoginResponse, RegisterRequest};
use crate::{ApiError, Result};

/// Login endpoint
pub const LOGIN_PATH: &str = "/auth/login/";
/// Registration endpoint
pub const REGISTER_PATH: &str = "/auth/register/";
/// Event collection endpoint
pub const EVENTS_PATH: &str = "/events/";

/// Path of a single event
///
/// The id is percent-encoded into one path segment. Ids that would still be
/// read as a dot segment (`.`, `..`) or an empty segment are rejected.
pub fn event_path(id: &EventId) -> Result<String> {
    match id.as_str() {
        "" | "." | ".." => Err(ApiError::InvalidEventId(id.to_string())),
        raw => Ok(format!("{}{}/", EVENTS_PATH, urlencoding::encode(raw))),
    }
}

/// NexEvent API bindings
#[derive(Debug, Clone)]
pub struct NexEventApi {
    client: ApiClient,
}

impl NexEventApi {
    /// Create the API bindings with a fresh HTTP client
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        Ok(Self { client: ApiClient::new(config)? })
    }

    /// Wrap an existing HTTP client
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login/`
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest { email: email.to_string(), password: password.to_string() };
        self.client.post(LOGIN_PATH, &body).await
    }

    /// `POST /auth/register/`, returning the raw success body
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<serde_json::Value> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post(REGISTER_PATH, &body).await
    }

    /// `GET /events/`
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.client.get(EVENTS_PATH).await
    }

    /// `GET /events/{id}/`
    pub async fn get_event(&self, id: &EventId) -> Result<Event> {
        self.client.get(&event_path(id)?).await
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
