//! Core application logic for NexEvent
//!
//! This crate contains the services the screens call into: authentication
//! (login, registration, token persistence) and event retrieval.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod events;

pub use auth::{AuthError, AuthService};
pub use events::{EventError, EventService};
