//! Test utilities and fixtures for NexEvent API testing
//!
//! Canned payloads shaped like the real API responses, shared by the
//! downstream crates' tests through the `test-utils` feature.

#![allow(dead_code)]

use serde_json::{json, Value};

/// Test credentials
pub mod credentials {
    /// Email of the canned account
    pub const EMAIL: &str = "alice@example.com";
    /// Password of the canned account
    pub const PASSWORD: &str = "correct-horse";
    /// Username of the canned account
    pub const USERNAME: &str = "alice";
}

/// Canned access token
pub const ACCESS_TOKEN: &str = "access-token-123";
/// Canned refresh token
pub const REFRESH_TOKEN: &str = "refresh-token-456";

/// A successful login body
pub fn login_success() -> Value {
    json!({
        "access": ACCESS_TOKEN,
        "refresh": REFRESH_TOKEN,
        "user": {
            "id": 1,
            "username": credentials::USERNAME,
            "email": credentials::EMAIL
        }
    })
}

/// A rejected login body (Django REST style)
pub fn login_rejected() -> Value {
    json!({"detail": "No active account found with the given credentials"})
}

/// A successful registration body
pub fn register_success() -> Value {
    json!({
        "id": 1,
        "username": credentials::USERNAME,
        "email": credentials::EMAIL
    })
}

/// A single event with the given id
pub fn event(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Event {}", id),
        "date_time": "2025-03-05T18:30:00Z",
        "location": "Main Hall",
        "feature_image": format!("https://cdn.example.com/events/{}.jpg", id),
        "description": "Doors open at six.\\r\\nBring a friend.",
        "terms_and_conditions": "No refunds.\r\nBe kind."
    })
}

/// A collection of `count` events with ids `1..=count`
pub fn events(count: u64) -> Value {
    Value::Array((1..=count).map(event).collect())
}
