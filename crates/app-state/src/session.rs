//! Session state machine
//!
//! The session is either `Unauthenticated` (initial) or `Authenticated`.
//! `SessionController` is the only owner of that state; navigation derives
//! from it rather than the other way round.
//!
//! Transitions:
//! - login success with a present user object: Unauthenticated -> Authenticated
//! - confirmed logout: Authenticated -> Unauthenticated, both tokens removed
//! - cancelled logout: no change

use app_core::{AuthError, AuthService};
use event_client::User;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::failure::FailureKind;

/// Email of the development bypass account
pub const DEV_BYPASS_EMAIL: &str = "test@example.com";
/// Password of the development bypass account
pub const DEV_BYPASS_PASSWORD: &str = "admin";

// =============================================================================
// Errors
// =============================================================================

/// Client-side validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Session-related errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Auth service error
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Client-side validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Login succeeded but the response carried no user
    #[error("Login response did not include a user")]
    MissingUser,
}

impl SessionError {
    /// Classify this error for display
    pub fn kind(&self) -> FailureKind {
        match self {
            SessionError::Auth(e) => FailureKind::of_auth(e),
            SessionError::Validation(_) => FailureKind::Validation,
            SessionError::MissingUser => FailureKind::Http,
        }
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

// =============================================================================
// Inputs
// =============================================================================

/// Login form input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    /// Email
    pub email: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    fn is_dev_bypass(&self) -> bool {
        self.email == DEV_BYPASS_EMAIL && self.password == DEV_BYPASS_PASSWORD
    }
}

/// Registration form input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationInput {
    /// Username
    pub username: String,
    /// Email
    pub email: String,
    /// Password
    pub password: String,
    /// Password confirmation (checked locally, never sent)
    pub confirm_password: String,
}

impl RegistrationInput {
    /// Check the input before anything is sent
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    /// Credentials for the login that follows a successful registration
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

/// Answer to the logout confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutConfirmation {
    /// User pressed OK
    Confirmed,
    /// User pressed Cancel
    Cancelled,
}

// =============================================================================
// State
// =============================================================================

/// How the current session came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrigin {
    /// Email/password login
    Login,
    /// Automatic login right after registration
    Registration,
    /// Stored tokens found at startup
    Restored,
    /// Development bypass credentials
    DevBypass,
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// User object from the login response (absent for restored and bypass sessions)
    pub user: Option<User>,
    /// How the session was established
    pub origin: SessionOrigin,
}

/// Application-level session state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "session")]
pub enum SessionState {
    /// No session (initial state)
    #[default]
    Unauthenticated,
    /// Signed in
    Authenticated(Session),
}

impl SessionState {
    /// Whether a session is active
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Unauthenticated => None,
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Session controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Accept the development bypass credentials without a network call
    pub dev_bypass: bool,
    /// Resume from stored tokens at startup instead of always asking to log in
    pub restore_session: bool,
}

impl SessionConfig {
    /// Create the default configuration (no bypass, no restore)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the development bypass
    pub fn dev_bypass(mut self, enabled: bool) -> Self {
        self.dev_bypass = enabled;
        self
    }

    /// Enable or disable startup session restore
    pub fn restore_session(mut self, enabled: bool) -> Self {
        self.restore_session = enabled;
        self
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Session controller
///
/// Owns the session state. Cloning shares the same state.
///
/// # Example
///
/// ```rust,no_run
/// use app_core::AuthService;
/// use app_state::{Credentials, SessionConfig, SessionController};
/// use event_client::{ApiClientConfig, NexEventApi};
/// use storage::{KvStore, TokenStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = NexEventApi::new(ApiClientConfig::default())?;
///     let auth = AuthService::new(api, TokenStore::new(KvStore::in_memory()?));
///     let controller = SessionController::new(auth, SessionConfig::new());
///
///     controller.login(&Credentials::new("alice@example.com", "pw")).await?;
///     assert!(controller.is_authenticated());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionController {
    auth: AuthService,
    config: SessionConfig,
    state: Arc<RwLock<SessionState>>,
}

impl SessionController {
    /// Create a controller in the `Unauthenticated` state
    pub fn new(auth: AuthService, config: SessionConfig) -> Self {
        Self { auth, config, state: Arc::new(RwLock::new(SessionState::Unauthenticated)) }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Whether a session is active
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Get the configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn transition(&self, next: SessionState) -> SessionState {
        let mut state = self.state.write();
        if *state != next {
            tracing::info!(
                "Session: {} -> {}",
                if state.is_authenticated() { "authenticated" } else { "unauthenticated" },
                if next.is_authenticated() { "authenticated" } else { "unauthenticated" }
            );
        }
        *state = next.clone();
        next
    }

    /// Startup check
    ///
    /// With `restore_session` off this never changes state, so every launch
    /// starts at the login screen even if tokens are stored.
    pub fn restore(&self) -> Result<SessionState> {
        if !self.config.restore_session {
            return Ok(self.state());
        }

        match self.auth.stored_tokens()? {
            Some(_) => {
                tracing::info!("Resuming session from stored tokens");
                Ok(self.transition(SessionState::Authenticated(Session {
                    user: None,
                    origin: SessionOrigin::Restored,
                })))
            }
            None => Ok(self.state()),
        }
    }

    /// Log in with email and password
    ///
    /// Failure leaves the state as it was.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionState> {
        if self.config.dev_bypass && credentials.is_dev_bypass() {
            tracing::warn!("Development bypass credentials accepted; no request sent");
            return Ok(self.transition(SessionState::Authenticated(Session {
                user: None,
                origin: SessionOrigin::DevBypass,
            })));
        }

        self.sign_in(credentials, SessionOrigin::Login).await
    }

    /// Register a new account
    ///
    /// Validation runs first and short-circuits before any request. State is
    /// not changed; follow up with [`SessionController::sign_in_registered`].
    pub async fn register(&self, input: &RegistrationInput) -> Result<serde_json::Value> {
        input.validate()?;

        Ok(self.auth.register(&input.username, &input.email, &input.password).await?)
    }

    /// Log in with the credentials of a freshly registered account
    pub async fn sign_in_registered(&self, input: &RegistrationInput) -> Result<SessionState> {
        self.sign_in(&input.credentials(), SessionOrigin::Registration).await
    }

    async fn sign_in(&self, credentials: &Credentials, origin: SessionOrigin) -> Result<SessionState> {
        let user = self.auth.login(&credentials.email, &credentials.password).await?;

        if !user.is_present() {
            tracing::warn!("Login response carried no user; staying signed out");
            return Err(SessionError::MissingUser);
        }

        Ok(self.transition(SessionState::Authenticated(Session { user: Some(user), origin })))
    }

    /// Log out after the user answered the confirmation prompt
    ///
    /// Returns whether a logout happened. On a storage failure the state is
    /// left unchanged.
    pub fn logout(&self, confirmation: LogoutConfirmation) -> Result<bool> {
        if confirmation == LogoutConfirmation::Cancelled {
            tracing::debug!("Logout cancelled");
            return Ok(false);
        }

        self.auth.clear_tokens()?;
        self.transition(SessionState::Unauthenticated);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_client::test_utils::{self, credentials};
    use event_client::{ApiClientConfig, NexEventApi};
    use storage::{KvStore, SessionTokens, TokenStore};
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn controller_for(server: &MockServer, config: SessionConfig) -> (SessionController, TokenStore) {
        let api = NexEventApi::new(ApiClientConfig::new(server.uri())).unwrap();
        let tokens = TokenStore::new(KvStore::in_memory().unwrap());
        let auth = AuthService::new(api, tokens.clone());
        (SessionController::new(auth, config), tokens)
    }

    async fn mount_login(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/auth/login/"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    fn valid_credentials() -> Credentials {
        Credentials::new(credentials::EMAIL, credentials::PASSWORD)
    }

    fn registration(confirm: &str) -> RegistrationInput {
        RegistrationInput {
            username: credentials::USERNAME.to_string(),
            email: credentials::EMAIL.to_string(),
            password: credentials::PASSWORD.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_unauthenticated() {
        let server = MockServer::start().await;
        let (controller, _) = controller_for(&server, SessionConfig::new());
        assert_eq!(controller.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_dev_bypass_skips_network() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let (controller, tokens) = controller_for(&server, SessionConfig::new().dev_bypass(true));
        let state = controller
            .login(&Credentials::new(DEV_BYPASS_EMAIL, DEV_BYPASS_PASSWORD))
            .await
            .unwrap();

        assert_eq!(state.session().map(|s| s.origin), Some(SessionOrigin::DevBypass));
        assert!(controller.is_authenticated());
        assert!(!tokens.has_any().unwrap());
    }

    #[tokio::test]
    async fn test_dev_bypass_disabled_by_default() {
        let server = MockServer::start().await;
        mount_login(&server, 401, test_utils::login_rejected()).await;

        let (controller, _) = controller_for(&server, SessionConfig::new());
        let result = controller
            .login(&Credentials::new(DEV_BYPASS_EMAIL, DEV_BYPASS_PASSWORD))
            .await;

        assert!(result.is_err());
        assert!(!controller.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_success_stores_tokens() {
        let server = MockServer::start().await;
        mount_login(&server, 200, test_utils::login_success()).await;

        let (controller, tokens) = controller_for(&server, SessionConfig::new());
        let state = controller.login(&valid_credentials()).await.unwrap();

        let session = state.session().unwrap();
        assert_eq!(session.origin, SessionOrigin::Login);
        assert_eq!(session.user.as_ref().and_then(|u| u.display_name()), Some("alice"));
        assert_eq!(
            tokens.load().unwrap(),
            Some(SessionTokens::new(test_utils::ACCESS_TOKEN, test_utils::REFRESH_TOKEN))
        );
    }

    #[tokio::test]
    async fn test_login_failure_keeps_unauthenticated() {
        let server = MockServer::start().await;
        mount_login(&server, 401, test_utils::login_rejected()).await;

        let (controller, tokens) = controller_for(&server, SessionConfig::new());
        let err = controller.login(&valid_credentials()).await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::Http);
        assert_eq!(controller.state(), SessionState::Unauthenticated);
        assert!(!tokens.has_any().unwrap());
    }

    #[tokio::test]
    async fn test_login_without_user_stays_unauthenticated() {
        let server = MockServer::start().await;
        mount_login(
            &server,
            200,
            serde_json::json!({"access": "a", "refresh": "r", "user": null}),
        )
        .await;

        let (controller, _) = controller_for(&server, SessionConfig::new());
        let err = controller.login(&valid_credentials()).await.unwrap_err();

        assert!(matches!(err, SessionError::MissingUser));
        assert!(!controller.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_mismatch_never_sends() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let (controller, _) = controller_for(&server, SessionConfig::new());
        let err = controller.register(&registration("different")).await.unwrap_err();

        assert!(matches!(err, SessionError::Validation(ValidationError::PasswordMismatch)));
        assert_eq!(err.kind(), FailureKind::Validation);
    }

    #[tokio::test]
    async fn test_register_then_sign_in() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(test_utils::register_success()))
            .expect(1)
            .mount(&server)
            .await;
        mount_login(&server, 200, test_utils::login_success()).await;

        let (controller, _) = controller_for(&server, SessionConfig::new());
        let input = registration(credentials::PASSWORD);

        controller.register(&input).await.unwrap();
        assert!(!controller.is_authenticated());

        let state = controller.sign_in_registered(&input).await.unwrap();
        assert_eq!(state.session().map(|s| s.origin), Some(SessionOrigin::Registration));
    }

    #[tokio::test]
    async fn test_logout_confirmed_clears_tokens() {
        let server = MockServer::start().await;
        mount_login(&server, 200, test_utils::login_success()).await;

        let (controller, tokens) = controller_for(&server, SessionConfig::new());
        controller.login(&valid_credentials()).await.unwrap();

        assert!(controller.logout(LogoutConfirmation::Confirmed).unwrap());
        assert_eq!(controller.state(), SessionState::Unauthenticated);
        assert!(!tokens.has_any().unwrap());
    }

    #[tokio::test]
    async fn test_logout_cancelled_changes_nothing() {
        let server = MockServer::start().await;
        mount_login(&server, 200, test_utils::login_success()).await;

        let (controller, tokens) = controller_for(&server, SessionConfig::new());
        let before = controller.login(&valid_credentials()).await.unwrap();

        assert!(!controller.logout(LogoutConfirmation::Cancelled).unwrap());
        assert_eq!(controller.state(), before);
        assert!(tokens.load().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_restore_disabled_ignores_tokens() {
        let server = MockServer::start().await;
        let (controller, tokens) = controller_for(&server, SessionConfig::new());
        tokens.save(&SessionTokens::new("acc", "ref")).unwrap();

        assert_eq!(controller.restore().unwrap(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_restore_enabled_resumes() {
        let server = MockServer::start().await;
        let (controller, tokens) =
            controller_for(&server, SessionConfig::new().restore_session(true));

        assert_eq!(controller.restore().unwrap(), SessionState::Unauthenticated);

        tokens.save(&SessionTokens::new("acc", "ref")).unwrap();
        let state = controller.restore().unwrap();
        assert_eq!(state.session().map(|s| s.origin), Some(SessionOrigin::Restored));
    }

    #[test]
    fn test_registration_validation() {
        assert!(registration(credentials::PASSWORD).validate().is_ok());
        assert_eq!(registration("nope").validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_session_state_serialization() {
        let state = SessionState::Authenticated(Session {
            user: None,
            origin: SessionOrigin::Restored,
        });
        let json = serde_json::to_string(&state).unwrap();
        let parsed: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}
