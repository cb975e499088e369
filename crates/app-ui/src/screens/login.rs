//! Login screen

use app_state::Credentials;
use serde::Serialize;

use super::form::{FieldView, TextField};
use super::APP_TITLE;
use crate::navigation::Route;

/// Links shown under the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginLink {
    /// "New to NexEvent? Create an account"
    CreateAccount,
    /// "Forgot Password?"
    ForgotPassword,
}

impl LoginLink {
    /// Label text
    pub fn label(&self) -> &'static str {
        match self {
            LoginLink::CreateAccount => LoginScreen::CREATE_ACCOUNT_LINK,
            LoginLink::ForgotPassword => LoginScreen::FORGOT_PASSWORD_LINK,
        }
    }

    /// Where the link leads; password recovery has no screen of its own
    pub fn target(&self) -> Route {
        match self {
            LoginLink::CreateAccount => Route::Register,
            LoginLink::ForgotPassword => Route::Login,
        }
    }
}

/// Login form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginScreen {
    /// Email input
    pub email: TextField,
    /// Password input
    pub password: TextField,
    loading: bool,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    /// Screen title
    pub const TITLE: &'static str = "Login";
    /// Submit button label
    pub const SUBMIT_LABEL: &'static str = "Login";
    /// Registration link label
    pub const CREATE_ACCOUNT_LINK: &'static str = "New to NexEvent? Create an account";
    /// Password recovery link label
    pub const FORGOT_PASSWORD_LINK: &'static str = "Forgot Password?";
    /// Notice title on failure
    pub const FAILURE_TITLE: &'static str = "Login Failed";
    /// Notice body on failure
    pub const FAILURE_MESSAGE: &'static str = "Invalid credentials";

    /// Empty form
    pub fn new() -> Self {
        Self {
            email: TextField::new("Email", "Enter your email"),
            password: TextField::secure("Password", "Enter your password"),
            loading: false,
        }
    }

    /// Whether a submit is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current form values
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.value(), self.password.value())
    }

    /// Start a submit
    ///
    /// Returns `None` while a previous submit is still in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.credentials())
    }

    /// Submit finished (either way)
    pub fn finish_submit(&mut self) {
        self.loading = false;
    }

    /// Render state
    pub fn view(&self) -> LoginView {
        LoginView {
            app_title: APP_TITLE,
            title: Self::TITLE,
            email: self.email.view(),
            password: self.password.view(),
            submit_label: Self::SUBMIT_LABEL,
            loading: self.loading,
            links: vec![
                LoginLink::CreateAccount.label(),
                LoginLink::ForgotPassword.label(),
            ],
        }
    }
}

/// Render state of the login screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginView {
    /// App name
    pub app_title: &'static str,
    /// Screen title
    pub title: &'static str,
    /// Email input
    pub email: FieldView,
    /// Password input
    pub password: FieldView,
    /// Submit button label
    pub submit_label: &'static str,
    /// Spinner in place of the submit label
    pub loading: bool,
    /// Link labels
    pub links: Vec<&'static str>,
}
