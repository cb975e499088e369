//! Wire types for the NexEvent API
//!
//! Request and response payloads for the auth and events endpoints. The user
//! object returned by login is server-defined and kept as opaque JSON.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// Auth payloads
// =============================================================================

/// Login request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Login response body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Access token (opaque)
    pub access: String,
    /// Refresh token (opaque)
    pub refresh: String,
    /// Server-defined user object
    #[serde(default)]
    pub user: User,
}

/// Registration request body
///
/// The password confirmation is a client-side check only and never leaves
/// the device, so it has no field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Chosen username
    pub username: String,
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Server-defined user object, not validated by the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub serde_json::Value);

impl User {
    /// Whether the value would count as "present" in a loose boolean check
    ///
    /// `null`, `false`, `0` and `""` are absent; objects and arrays are
    /// present even when empty.
    pub fn is_present(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
        }
    }

    /// Best-effort display name (`username`, then `email`)
    pub fn display_name(&self) -> Option<&str> {
        ["username", "email"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(|v| v.as_str()))
    }
}

// =============================================================================
// Events
// =============================================================================

/// Event identifier
///
/// The API sends numeric ids; strings are accepted too so the id can be
/// carried through navigation parameters unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Create an id from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Str(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => EventId(n.to_string()),
            RawId::Str(s) => EventId(s),
        })
    }
}

/// An event as returned by `/events/` and `/events/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier
    pub id: EventId,
    /// Event title
    #[serde(default)]
    pub title: String,
    /// Start date/time as sent by the server (ISO 8601)
    #[serde(default)]
    pub date_time: String,
    /// Venue
    #[serde(default)]
    pub location: String,
    /// Feature image URL
    #[serde(default)]
    pub feature_image: String,
    /// Free-text description, may contain literal or escaped newlines
    #[serde(default)]
    pub description: String,
    /// Free-text terms, may contain literal or escaped newlines
    #[serde(default)]
    pub terms_and_conditions: String,
}
