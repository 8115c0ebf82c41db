// ABOUTME: File-backed key-value store writing one JSON document per key
// ABOUTME: Writes go to a temp file and are renamed into place so readers never see partial blobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::StorageError;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

const BLOB_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Stores each key as `<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|error| StorageError::io(root.display().to_string(), error))?;
        debug!(root = %root.display(), "File store ready");
        Ok(Self { root })
    }

    /// Directory holding the blobs
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::io(
                key,
                io::Error::new(ErrorKind::InvalidInput, "key must be [A-Za-z0-9_-]+"),
            ));
        }
        Ok(self.root.join(format!("{key}.{BLOB_EXTENSION}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::io(key, error)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.blob_path(key)?;
        let temp = path.with_extension(format!("{BLOB_EXTENSION}.{TEMP_SUFFIX}"));
        fs::write(&temp, value).map_err(|error| StorageError::io(key, error))?;
        fs::rename(&temp, &path).map_err(|error| {
            if let Err(cleanup) = fs::remove_file(&temp) {
                debug!(
                    path = %temp.display(),
                    error = %cleanup,
                    "Failed to remove temporary blob"
                );
            }
            StorageError::io(key, error)
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.blob_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StorageError::io(key, error)),
        }
    }

    fn is_available(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
