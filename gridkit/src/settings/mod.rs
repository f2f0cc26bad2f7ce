//! Settings system for typed key-value storage.

mod backend;
mod file;
mod memory;

pub use backend::SettingsBackend;
pub use file::JsonFileBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),
}

/// Typed settings provider.
///
/// Wraps a [`SettingsBackend`] with typed serialization via JSON. All
/// operations are synchronous one-shot reads/writes; components load once
/// on initialization and save on every state change.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    /// Create a new settings provider with the given backend.
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Get a typed value for a key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(key)? {
            Some(bytes) => Ok(Some(
                serde_json::from_slice(&bytes).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SettingsError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = serde_json::to_vec(value).map_err(SettingsError::Serialization)?;
        self.backend.set_bytes(key, bytes)
    }

    /// Delete a key.
    pub fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key)
    }

    /// Get all keys matching a prefix.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        self.backend.keys_with_prefix(prefix)
    }
}
