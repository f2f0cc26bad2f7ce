//! In-memory settings backend.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{SettingsBackend, SettingsError};

/// An in-memory settings backend.
///
/// This is the default backend for tests and ephemeral sessions. It's fast,
/// but data is lost when the process exits.
///
/// # Example
///
/// ```
/// use gridkit::settings::{MemoryBackend, SettingsProvider};
///
/// let settings = SettingsProvider::new(MemoryBackend::new());
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Creates a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.store.read().map(|g| g.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsBackend for MemoryBackend {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        Ok(self.store.read().ok().and_then(|g| g.get(key).cloned()))
    }

    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError> {
        if let Ok(mut g) = self.store.write() {
            g.insert(key.to_string(), value);
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        if let Ok(mut g) = self.store.write() {
            g.remove(key);
        }
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        Ok(self
            .store
            .read()
            .map(|g| {
                g.keys()
                    .filter(|k| k.starts_with(prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
