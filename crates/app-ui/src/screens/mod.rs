//! Application screens
//!
//! Each screen is plain state plus a `view()` producing a serializable render
//! model. Screens never perform I/O; the [`crate::app::App`] orchestrator
//! runs their requests and feeds results back in.
//!
//! - [`login`] - Email/password form
//! - [`register`] - Account creation form
//! - [`home`] - Event list
//! - [`event_details`] - Single event
//! - [`format`] - Text and date formatting for event content

pub mod event_details;
pub mod form;
pub mod format;
pub mod home;
pub mod login;
pub mod register;

pub use event_details::{EventDetailsBody, EventDetailsScreen, EventDetailsView, Section};
pub use form::{FieldView, TextField};
pub use format::{format_content, format_event_date};
pub use home::{EventCard, HomeScreen, HomeView};
pub use login::{LoginLink, LoginScreen, LoginView};
pub use register::{RegisterScreen, RegisterView};

use serde::Serialize;

use crate::navigation::Route;

/// App name shown on the auth forms
pub const APP_TITLE: &str = "NexEvent";

/// Progress of a screen's single fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FetchState {
    /// Not started
    #[default]
    Pending,
    /// Request outstanding
    Loading,
    /// Finished, successfully or not
    Done,
}

/// State of whichever screen a stack entry shows
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Login form
    Login(LoginScreen),
    /// Registration form
    Register(RegisterScreen),
    /// Event list
    Home(HomeScreen),
    /// Single event
    EventDetails(EventDetailsScreen),
    /// Unknown path
    NotFound,
}

impl Screen {
    /// Fresh screen state for a route
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Login => Screen::Login(LoginScreen::new()),
            Route::Register => Screen::Register(RegisterScreen::new()),
            Route::Home => Screen::Home(HomeScreen::new()),
            Route::EventDetails { event_id } => {
                Screen::EventDetails(EventDetailsScreen::new(event_id.clone()))
            }
            Route::NotFound => Screen::NotFound,
        }
    }

    /// Render state
    pub fn view(&self) -> View {
        match self {
            Screen::Login(screen) => View::Login(screen.view()),
            Screen::Register(screen) => View::Register(screen.view()),
            Screen::Home(screen) => View::Home(screen.view()),
            Screen::EventDetails(screen) => View::EventDetails(screen.view()),
            Screen::NotFound => View::NotFound { message: NOT_FOUND_MESSAGE },
        }
    }
}

const NOT_FOUND_MESSAGE: &str = "Page not found";

/// Render model of the current screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "view", rename_all = "snake_case")]
pub enum View {
    /// Login form
    Login(LoginView),
    /// Registration form
    Register(RegisterView),
    /// Event list
    Home(HomeView),
    /// Single event
    EventDetails(EventDetailsView),
    /// Unknown path
    NotFound {
        /// Placeholder text
        message: &'static str,
    },
}
