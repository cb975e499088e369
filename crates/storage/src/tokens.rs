//! Session token storage
//!
//! The access and refresh tokens live under two fixed keys in the key-value
//! store. They are opaque strings; nothing here inspects them.

use serde::{Deserialize, Serialize};

use crate::kv::{KvStore, Result};

/// Storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Tokens produced by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    /// Access token
    pub access_token: String,
    /// Refresh token
    pub refresh_token: String,
}

impl SessionTokens {
    /// Create a token pair
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), refresh_token: refresh_token.into() }
    }
}

/// Token store over a shared key-value store
#[derive(Debug, Clone)]
pub struct TokenStore {
    kv: KvStore,
}

impl TokenStore {
    /// Create a new token store
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Persist both tokens
    ///
    /// The two writes are independent; an interruption between them can
    /// leave only the access token behind.
    pub fn save(&self, tokens: &SessionTokens) -> Result<()> {
        self.kv.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        self.kv.set(REFRESH_TOKEN_KEY, &tokens.refresh_token)?;
        self.kv.flush()
    }

    /// Load both tokens, or `None` unless both are present
    pub fn load(&self) -> Result<Option<SessionTokens>> {
        let access: Option<String> = self.kv.get(ACCESS_TOKEN_KEY)?;
        let refresh: Option<String> = self.kv.get(REFRESH_TOKEN_KEY)?;

        Ok(match (access, refresh) {
            (Some(access_token), Some(refresh_token)) => {
                Some(SessionTokens { access_token, refresh_token })
            }
            _ => None,
        })
    }

    /// Remove both tokens
    pub fn clear(&self) -> Result<()> {
        self.kv.remove(ACCESS_TOKEN_KEY)?;
        self.kv.remove(REFRESH_TOKEN_KEY)?;
        self.kv.flush()
    }

    /// Check whether either token is stored
    pub fn has_any(&self) -> Result<bool> {
        Ok(self.kv.contains(ACCESS_TOKEN_KEY)? || self.kv.contains(REFRESH_TOKEN_KEY)?)
    }

    /// Get the underlying key-value store
    pub fn kv(&self) -> &KvStore {
        &self.kv
    }
}
