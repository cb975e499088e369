//! Event retrieval
//!
//! Read-only access to the event collection and single events. Nothing is
//! cached; every call goes to the server.

use event_client::{ApiError, Event, EventId, NexEventApi};
use thiserror::Error;

/// Event service error types
#[derive(Debug, Error)]
pub enum EventError {
    /// API error (network or non-2xx)
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Result type for event operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Event service
#[derive(Debug, Clone)]
pub struct EventService {
    api: NexEventApi,
}

impl EventService {
    /// Create a new event service
    pub fn new(api: NexEventApi) -> Self {
        Self { api }
    }

    /// Fetch the full event collection
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = self.api.list_events().await.inspect_err(|e| {
            tracing::warn!("Failed to fetch events: {}", e);
        })?;

        tracing::debug!("Fetched {} events", events.len());
        Ok(events)
    }

    /// Fetch a single event
    pub async fn get(&self, id: &EventId) -> Result<Event> {
        Ok(self.api.get_event(id).await.inspect_err(|e| {
            tracing::warn!("Failed to fetch event {}: {}", id, e);
        })?)
    }
}
