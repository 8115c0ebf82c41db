// ABOUTME: Local persistence abstraction for profile, logs, active quest and estimator blobs
// ABOUTME: Pluggable key-value backends (file, in-memory, unavailable) behind a typed facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Four JSON blobs make up all persisted state. Backends only move strings;
//! [`LocalStorage`] owns the (de)serialization and degrades corrupt or
//! unreadable blobs to "absent".

/// Backend selection from configuration
pub mod factory;
/// One-file-per-key backend
pub mod file;
/// Typed facade over the four storage keys
pub mod local;
/// Process-local backend
pub mod memory;
/// Backend used when no persistence is present
pub mod unavailable;

pub use factory::create_store;
pub use file::FileStore;
pub use local::LocalStorage;
pub use memory::InMemoryStore;
pub use unavailable::UnavailableStore;

use crate::errors::StorageError;

/// Synchronous string key-value backend
///
/// # Examples
///
/// ```rust
/// use pierre_quest::storage::{InMemoryStore, KeyValueStore};
///
/// let store = InMemoryStore::new();
/// store.set("greeting", "\"hello\"")?;
/// assert_eq!(store.get("greeting")?.as_deref(), Some("\"hello\""));
/// store.remove("greeting")?;
/// assert_eq!(store.get("greeting")?, None);
/// # Ok::<(), pierre_quest::errors::StorageError>(())
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Delete every key in `keys`
    ///
    /// # Errors
    ///
    /// Returns the first removal error; later keys are still attempted
    fn clear(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in keys {
            if let Err(error) = self.remove(key) {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Whether writes actually persist
    fn is_available(&self) -> bool;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}
