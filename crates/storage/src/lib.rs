//! Storage layer for NexEvent
//!
//! This crate provides the durable key-value store and the session token
//! store built on top of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod tokens;

pub use kv::{KvConfig, KvError, KvStore};
pub use tokens::{SessionTokens, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
