//! Key-value store for small durable values
//!
//! This module provides a type-safe key-value store using sled. Values are
//! stored as JSON so the on-disk format stays inspectable.

use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None for explicit flushes only)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "nexevent_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }
}

/// Key-value store implementation
///
/// Cloning is cheap and shares the same underlying database.
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore").field("len", &self.db.len()).finish()
    }
}

impl KvStore {
    /// Open (or create) a key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms)
            .open()?;

        tracing::debug!("Opened key-value store at {}", config.path);

        Ok(Self { db: Arc::new(db) })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        if key.is_empty() {
            return Err(KvError::InvalidKey("key must not be empty".to_string()));
        }

        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Remove a value by key, returning whether it existed
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Clear all data
    pub fn clear(&self) -> Result<()> {
        self.db.clear()?;
        Ok(())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        count: i32,
    }

    #[test]
    fn test_kv_store_creation() {
        let kv = KvStore::in_memory().unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("test_key", &"test_value".to_string()).unwrap();

        let value: Option<String> = kv.get("test_key").unwrap();
        assert_eq!(value, Some("test_value".to_string()));
    }

    #[test]
    fn test_set_and_get_struct() {
        let kv = KvStore::in_memory().unwrap();

        let data = TestData { name: "Alice".to_string(), count: 42 };
        kv.set("user", &data).unwrap();

        let retrieved: Option<TestData> = kv.get("user").unwrap();
        assert_eq!(retrieved, Some(data));
    }

    #[test]
    fn test_get_nonexistent() {
        let kv = KvStore::in_memory().unwrap();
        let value: Option<String> = kv.get("nonexistent").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_empty_key_rejected() {
        let kv = KvStore::in_memory().unwrap();
        assert!(matches!(kv.set("", &1), Err(KvError::InvalidKey(_))));
    }

    #[test]
    fn test_remove() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("key", &"value".to_string()).unwrap();
        assert!(kv.contains("key").unwrap());

        assert!(kv.remove("key").unwrap());
        assert!(!kv.contains("key").unwrap());

        // Removing a missing key is not an error
        assert!(!kv.remove("key").unwrap());
    }

    #[test]
    fn test_clear() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("a", &1).unwrap();
        kv.set("b", &2).unwrap();
        assert_eq!(kv.len(), 2);

        kv.clear().unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn test_clone_shares_database() {
        let kv = KvStore::in_memory().unwrap();
        let other = kv.clone();

        kv.set("shared", &true).unwrap();
        assert_eq!(other.get::<bool>("shared").unwrap(), Some(true));
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.db");
        let path = path.to_string_lossy().to_string();

        {
            let kv = KvStore::new(KvConfig::new(&path)).unwrap();
            kv.set("greeting", &"hello".to_string()).unwrap();
            kv.flush().unwrap();
        }

        let kv = KvStore::new(KvConfig::new(&path)).unwrap();
        let value: Option<String> = kv.get("greeting").unwrap();
        assert_eq!(value, Some("hello".to_string()));
    }

    #[test]
    fn test_config_keeps_defaults_for_custom_path() {
        let config = KvConfig::new("custom.db");

        assert_eq!(config.path, "custom.db");
        assert_eq!(config.cache_capacity, KvConfig::default().cache_capacity);
        assert!(config.use_compression);
        assert_eq!(config.flush_every_ms, Some(500));
    }
}
