//! Blocking notifications
//!
//! Every user-visible failure, success message, and confirmation goes
//! through a [`Prompter`]. The terminal front-end implements it over stdin;
//! tests mock it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A titled, dismissible message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Short title
    pub title: String,
    /// Body text
    pub message: String,
}

impl Notice {
    /// Create a notice
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into() }
    }
}

/// Answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptChoice {
    /// Proceed
    Ok,
    /// Back out
    Cancel,
}

/// Surface for notices and confirmations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Show a notice and wait until it is dismissed
    async fn notify(&self, notice: &Notice);

    /// Ask for confirmation
    async fn confirm(&self, notice: &Notice) -> PromptChoice;
}
