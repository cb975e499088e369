//! Application state management for NexEvent
//!
//! This crate owns the explicit session state machine (Unauthenticated /
//! Authenticated) and the classification of user-facing failures.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod failure;
pub mod session;

pub use failure::FailureKind;
pub use session::{
    Credentials, LogoutConfirmation, RegistrationInput, Session, SessionConfig, SessionController,
    SessionError, SessionOrigin, SessionState, ValidationError,
};
