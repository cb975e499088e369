//! Authentication service for NexEvent
//!
//! This module provides the two remote auth actions (login, registration)
//! and owns the token side effects: login persists the access and refresh
//! tokens, logout clears them. Input validation is left to the server and to
//! the caller's own checks.

use event_client::{ApiError, NexEventApi, User};
use storage::{KvError, SessionTokens, TokenStore};
use thiserror::Error;

/// Authentication service error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// API error (network or non-2xx)
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Token storage error
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Authentication service
///
/// # Example
///
/// ```rust,no_run
/// use app_core::auth::AuthService;
/// use event_client::{ApiClientConfig, NexEventApi};
/// use storage::{KvStore, TokenStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = NexEventApi::new(ApiClientConfig::default())?;
///     let tokens = TokenStore::new(KvStore::in_memory()?);
///     let auth = AuthService::new(api, tokens);
///
///     let user = auth.login("alice@example.com", "password").await?;
///     println!("Logged in as: {:?}", user.display_name());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthService {
    api: NexEventApi,
    tokens: TokenStore,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(api: NexEventApi, tokens: TokenStore) -> Self {
        Self { api, tokens }
    }

    /// Login with email and password
    ///
    /// On success both tokens are stored and the server's user object is
    /// returned as-is. On failure storage is not touched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = match self.api.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Login error: {}", e);
                return Err(e.into());
            }
        };

        let tokens = SessionTokens::new(response.access, response.refresh);
        if let Err(e) = self.tokens.save(&tokens) {
            tracing::error!("Login error: failed to store tokens: {}", e);
            return Err(e.into());
        }

        tracing::info!("Login succeeded for {}", email);
        Ok(response.user)
    }

    /// Register a new account
    ///
    /// Returns the raw server body. No storage side effects.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<serde_json::Value> {
        match self.api.register(username, email, password).await {
            Ok(body) => {
                tracing::info!("Registered account {}", username);
                Ok(body)
            }
            Err(e) => {
                tracing::error!("Registration error: {}", e);
                Err(e.into())
            }
        }
    }

    /// Read back the stored tokens, if both are present
    pub fn stored_tokens(&self) -> Result<Option<SessionTokens>> {
        Ok(self.tokens.load()?)
    }

    /// Remove both stored tokens
    pub fn clear_tokens(&self) -> Result<()> {
        self.tokens.clear()?;
        tracing::info!("Cleared stored session tokens");
        Ok(())
    }
}
