//! Application orchestrator
//!
//! [`App`] ties the session controller, the event service, navigation and
//! per-screen state together. Front-ends call its operations in response to
//! user input and render [`App::current_view`].
//!
//! Screen state is kept per navigation stack entry, so going back to a
//! screen finds it as it was left (a list that already loaded does not fetch
//! again) while a fresh push of the same route starts over.

use std::collections::HashMap;

use app_core::EventService;
use app_state::{FailureKind, LogoutConfirmation, SessionController, SessionError};
use event_client::EventId;

use crate::navigation::{NavigationState, Route, Router};
use crate::prompter::{Notice, PromptChoice, Prompter};
use crate::screens::{
    EventDetailsScreen, HomeScreen, LoginScreen, RegisterScreen, Screen, View,
};

/// Logout confirmation title
pub const LOGOUT_TITLE: &str = "Confirm Logout";
/// Logout confirmation body
pub const LOGOUT_MESSAGE: &str = "Are you sure you want to log out?";
/// Notice title when logout fails
pub const LOGOUT_FAILED_TITLE: &str = "Logout failed:";

enum FetchRequest {
    Events,
    Event(EventId),
}

/// The running application
pub struct App<P> {
    session: SessionController,
    events: EventService,
    navigation: NavigationState,
    router: Router,
    screens: HashMap<String, Screen>,
    prompter: P,
}

impl<P: Prompter> App<P> {
    /// Create the app at the Login screen
    pub fn new(session: SessionController, events: EventService, prompter: P) -> Self {
        let mut app = Self {
            session,
            events,
            navigation: NavigationState::new(),
            router: Router::new(),
            screens: HashMap::new(),
            prompter,
        };
        app.ensure_screen();
        app
    }

    /// Run the startup session check and load the first screen
    pub async fn start(&mut self) -> Result<(), SessionError> {
        let state = self.session.restore()?;
        self.navigation.sync(&state);
        self.show_current().await;
        Ok(())
    }

    /// Session controller
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Prompter
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Current route
    pub fn current_route(&self) -> &Route {
        self.navigation.current_route()
    }

    /// Navigation state
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Render model of the current screen
    pub fn current_view(&self) -> View {
        match self.screens.get(&self.current_key()) {
            Some(screen) => screen.view(),
            None => Screen::for_route(self.current_route()).view(),
        }
    }

    /// Login form, when it is the current screen
    pub fn login_form_mut(&mut self) -> Option<&mut LoginScreen> {
        match self.current_screen_mut()? {
            Screen::Login(screen) => Some(screen),
            _ => None,
        }
    }

    /// Registration form, when it is the current screen
    pub fn register_form_mut(&mut self) -> Option<&mut RegisterScreen> {
        match self.current_screen_mut()? {
            Screen::Register(screen) => Some(screen),
            _ => None,
        }
    }

    /// Submit the login form
    ///
    /// Ignored unless the login form is showing and idle.
    pub async fn submit_login(&mut self) {
        let Some(credentials) = self.login_form_mut().and_then(|form| form.begin_submit()) else {
            return;
        };

        let result = self.session.login(&credentials).await;

        match result {
            Ok(state) => {
                self.navigation.sync(&state);
                self.show_current().await;
            }
            Err(e) => {
                tracing::warn!("Login failed ({:?}): {}", e.kind(), e);
                if let Some(form) = self.login_form_mut() {
                    form.finish_submit();
                }
                self.notify(LoginScreen::FAILURE_TITLE, LoginScreen::FAILURE_MESSAGE).await;
            }
        }
    }

    /// Submit the registration form
    ///
    /// A password mismatch is reported without contacting the server. After
    /// a successful registration the same email and password are used to
    /// log in.
    pub async fn submit_register(&mut self) {
        let Some(input) = self.register_form_mut().and_then(|form| form.begin_submit()) else {
            return;
        };

        let outcome = match self.session.register(&input).await {
            Ok(_) => {
                self.notify(RegisterScreen::SUCCESS_TITLE, RegisterScreen::SUCCESS_MESSAGE).await;
                self.session.sign_in_registered(&input).await
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(state) => {
                self.navigation.sync(&state);
                self.show_current().await;
            }
            Err(e) => {
                if let Some(form) = self.register_form_mut() {
                    form.finish_submit();
                }
                if e.kind() == FailureKind::Validation {
                    self.notify(RegisterScreen::MISMATCH_TITLE, RegisterScreen::MISMATCH_MESSAGE)
                        .await;
                } else {
                    tracing::warn!("Registration failed ({:?}): {}", e.kind(), e);
                    self.notify(RegisterScreen::FAILURE_TITLE, RegisterScreen::FAILURE_MESSAGE)
                        .await;
                }
            }
        }
    }

    /// Navigate to a route (gated by the session state)
    pub async fn navigate(&mut self, route: Route) {
        let state = self.session.state();
        self.navigation.navigate(route, &state);
        self.show_current().await;
    }

    /// Navigate to a path such as `/events/3`
    pub async fn go(&mut self, path: &str) {
        let route = self.router.match_path(path);
        self.navigate(route).await;
    }

    /// Open an event's details
    pub async fn open_event(&mut self, event_id: impl Into<EventId>) {
        self.navigate(Route::event(event_id)).await;
    }

    /// Go back one screen; returns false at the root
    pub async fn go_back(&mut self) -> bool {
        let moved = self.navigation.go_back();
        if moved {
            self.show_current().await;
        }
        moved
    }

    /// Press Register on the details screen
    ///
    /// Purely local acknowledgement; nothing is sent.
    pub async fn register_for_event(&mut self) {
        let loaded = matches!(
            self.screens.get(&self.current_key()),
            Some(Screen::EventDetails(details)) if details.event().is_some()
        );
        if loaded {
            self.notify(
                EventDetailsScreen::REGISTERED_TITLE,
                EventDetailsScreen::REGISTERED_MESSAGE,
            )
            .await;
        }
    }

    /// Ask for confirmation and log out
    ///
    /// Returns whether the session ended.
    pub async fn request_logout(&mut self) -> bool {
        if !self.session.is_authenticated() {
            return false;
        }

        let choice = self.prompter.confirm(&Notice::new(LOGOUT_TITLE, LOGOUT_MESSAGE)).await;
        let confirmation = match choice {
            PromptChoice::Ok => LogoutConfirmation::Confirmed,
            PromptChoice::Cancel => LogoutConfirmation::Cancelled,
        };

        match self.session.logout(confirmation) {
            Ok(true) => {
                self.navigation.sync(&self.session.state());
                self.show_current().await;
                true
            }
            Ok(false) => false,
            Err(e) => {
                tracing::error!("Logout failed: {}", e);
                self.notify(LOGOUT_FAILED_TITLE, e.kind().describe()).await;
                false
            }
        }
    }

    // =========================================================================
    // Screen bookkeeping
    // =========================================================================

    fn current_key(&self) -> String {
        self.navigation.stack().current_entry().key.clone()
    }

    fn current_screen_mut(&mut self) -> Option<&mut Screen> {
        let key = self.current_key();
        self.screens.get_mut(&key)
    }

    /// Create state for the current entry and drop state of popped entries
    fn ensure_screen(&mut self) {
        let stack = self.navigation.stack();
        self.screens.retain(|key, _| stack.entries().any(|entry| &entry.key == key));

        let entry = stack.current_entry();
        if !self.screens.contains_key(&entry.key) {
            self.screens.insert(entry.key.clone(), Screen::for_route(&entry.route));
        }
    }

    /// Make the current screen ready, running its fetch if it has not yet
    async fn show_current(&mut self) {
        self.ensure_screen();
        let key = self.current_key();

        let request = match self.screens.get_mut(&key) {
            Some(Screen::Home(home)) => home.begin_fetch().then_some(FetchRequest::Events),
            Some(Screen::EventDetails(details)) => details
                .begin_fetch()
                .then(|| FetchRequest::Event(details.event_id().clone())),
            _ => None,
        };
        let Some(request) = request else {
            return;
        };

        match request {
            FetchRequest::Events => {
                let result = self.events.list().await;
                let failure = match (self.screens.get_mut(&key), result) {
                    (Some(Screen::Home(home)), Ok(events)) => {
                        home.finish_fetch(events);
                        None
                    }
                    (Some(Screen::Home(home)), Err(e)) => {
                        home.fail_fetch();
                        Some(FailureKind::of_event(&e))
                    }
                    _ => None,
                };
                if let Some(kind) = failure {
                    self.notify(HomeScreen::FETCH_FAILED_TITLE, kind.describe()).await;
                }
            }
            FetchRequest::Event(id) => {
                let result = self.events.get(&id).await;
                let failure = match (self.screens.get_mut(&key), result) {
                    (Some(Screen::EventDetails(details)), Ok(event)) => {
                        details.finish_fetch(event);
                        None
                    }
                    (Some(Screen::EventDetails(details)), Err(e)) => {
                        details.fail_fetch();
                        Some(FailureKind::of_event(&e))
                    }
                    _ => None,
                };
                if let Some(kind) = failure {
                    self.notify(EventDetailsScreen::FETCH_FAILED_TITLE, kind.describe()).await;
                }
            }
        }
    }

    async fn notify(&self, title: &str, message: &str) {
        self.prompter.notify(&Notice::new(title, message)).await;
    }
}
