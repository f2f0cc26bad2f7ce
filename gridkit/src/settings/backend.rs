//! Settings backend trait.

use super::SettingsError;

/// Backend trait for settings storage.
///
/// Implementations handle raw byte storage/retrieval.
/// The `SettingsProvider` wraps this with typed serialization.
pub trait SettingsBackend: Send + Sync {
    /// Get raw bytes for a key.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError>;

    /// Set raw bytes for a key.
    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError>;

    /// Delete a key.
    fn delete(&self, key: &str) -> Result<(), SettingsError>;

    /// Get all keys matching a prefix.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError>;
}
