// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Falls back to the unavailable backend when the data directory cannot be created
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FileStore, InMemoryStore, KeyValueStore, UnavailableStore};
use crate::config::{QuestConfig, StoreBackend};
use std::sync::Arc;
use tracing::{info, warn};

/// Build the backend named by `config.store`
///
/// A file backend whose directory cannot be created degrades to
/// [`UnavailableStore`] rather than failing startup.
#[must_use]
pub fn create_store(config: &QuestConfig) -> Arc<dyn KeyValueStore> {
    let store: Arc<dyn KeyValueStore> = match config.store {
        StoreBackend::File => match FileStore::new(&config.data_dir) {
            Ok(store) => Arc::new(store),
            Err(error) => {
                warn!(
                    %error,
                    data_dir = %config.data_dir.display(),
                    "Local storage unavailable, continuing without persistence"
                );
                Arc::new(UnavailableStore)
            }
        },
        StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        StoreBackend::Disabled => Arc::new(UnavailableStore),
    };
    info!(backend = store.backend_name(), "Initialized local storage");
    store
}
