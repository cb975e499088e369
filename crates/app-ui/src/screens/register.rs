//! Registration screen

use app_state::RegistrationInput;
use serde::Serialize;

use super::form::{FieldView, TextField};
use super::APP_TITLE;
use crate::navigation::Route;

/// Registration form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterScreen {
    /// Username input
    pub username: TextField,
    /// Email input
    pub email: TextField,
    /// Password input
    pub password: TextField,
    /// Password confirmation input
    pub confirm_password: TextField,
    loading: bool,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterScreen {
    /// Screen title
    pub const TITLE: &'static str = "Register";
    /// Submit button label
    pub const SUBMIT_LABEL: &'static str = "Register";
    /// Login link label
    pub const LOGIN_LINK: &'static str = "Already have an account? Login";
    /// Notice title on password mismatch
    pub const MISMATCH_TITLE: &'static str = "Error";
    /// Notice body on password mismatch
    pub const MISMATCH_MESSAGE: &'static str = "Passwords do not match";
    /// Notice title on success
    pub const SUCCESS_TITLE: &'static str = "Success";
    /// Notice body on success
    pub const SUCCESS_MESSAGE: &'static str = "Registration successful";
    /// Notice title on failure
    pub const FAILURE_TITLE: &'static str = "Registration Failed";
    /// Notice body on failure
    pub const FAILURE_MESSAGE: &'static str = "An error occurred during registration";

    /// Empty form
    pub fn new() -> Self {
        Self {
            username: TextField::new("Username", "Enter your username"),
            email: TextField::new("Email", "Enter your email"),
            password: TextField::secure("Password", "Enter your password"),
            confirm_password: TextField::secure("Confirm Password", "Confirm your password"),
            loading: false,
        }
    }

    /// Where the login link leads
    pub fn login_link_target() -> Route {
        Route::Login
    }

    /// Whether a submit is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current form values
    pub fn input(&self) -> RegistrationInput {
        RegistrationInput {
            username: self.username.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            confirm_password: self.confirm_password.value().to_string(),
        }
    }

    /// Start a submit; `None` while one is in flight
    pub fn begin_submit(&mut self) -> Option<RegistrationInput> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.input())
    }

    /// Submit finished (either way)
    pub fn finish_submit(&mut self) {
        self.loading = false;
    }

    /// Render state
    pub fn view(&self) -> RegisterView {
        RegisterView {
            app_title: APP_TITLE,
            title: Self::TITLE,
            fields: vec![
                self.username.view(),
                self.email.view(),
                self.password.view(),
                self.confirm_password.view(),
            ],
            submit_label: Self::SUBMIT_LABEL,
            loading: self.loading,
            login_link: Self::LOGIN_LINK,
        }
    }
}

/// Render state of the registration screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterView {
    /// App name
    pub app_title: &'static str,
    /// Screen title
    pub title: &'static str,
    /// Inputs in display order
    pub fields: Vec<FieldView>,
    /// Submit button label
    pub submit_label: &'static str,
    /// Spinner in place of the submit label
    pub loading: bool,
    /// Login link label
    pub login_link: &'static str,
}
