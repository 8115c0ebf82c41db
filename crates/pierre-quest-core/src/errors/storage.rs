// ABOUTME: Storage error types for the local key-value backends
// ABOUTME: Wraps I/O and JSON failures with the key that was being accessed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use thiserror::Error;

/// Errors raised by key-value storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        /// Key being read or written
        key: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Blob could not be encoded or decoded
    #[error("invalid JSON for key '{key}': {source}")]
    Serialization {
        /// Key being read or written
        key: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// No persistence backend is present
    #[error("storage backend unavailable")]
    Unavailable,
}

impl StorageError {
    /// Wrap an I/O error for `key`
    #[must_use]
    pub fn io(key: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Wrap a serde error for `key`
    #[must_use]
    pub fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            key: key.into(),
            source,
        }
    }
}
