//! User interface for NexEvent
//!
//! This crate provides the UI layer: screen state and render models,
//! navigation, and the [`App`] orchestrator that drives them from user
//! actions. It is front-end agnostic; the terminal driver in the root
//! binary is one consumer.
//!
//! # Modules
//!
//! - [`screens`] - Login, registration, event list and event details
//! - [`navigation`] - Routes, navigation stack, session gate, path router
//! - [`prompter`] - Blocking notices and confirmations
//! - [`app`] - Application orchestrator
//!
//! # Example
//!
//! ```rust
//! use app_ui::screens::format_content;
//! use app_ui::navigation::{Route, Router};
//!
//! let paragraphs = format_content("Line1\\r\\nLine2");
//! assert_eq!(paragraphs, vec!["Line1", "Line2"]);
//!
//! let route = Router::new().match_path("/events/3");
//! assert_eq!(route.to_path(), "/events/3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod navigation;
pub mod prompter;
pub mod screens;

// Re-export commonly used types
pub use app::App;

pub use navigation::{gate, NavigationStack, NavigationState, Route, RouteParams, Router, StackEntry};

pub use prompter::{Notice, PromptChoice, Prompter};

pub use screens::{format_content, format_event_date, Screen, View};
