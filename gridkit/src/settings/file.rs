//! JSON file settings backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{SettingsBackend, SettingsError};

/// A settings backend storing everything in one JSON document.
///
/// The file holds a single object mapping setting keys to their JSON
/// values, so it stays inspectable and hand-editable. Every write rewrites
/// the whole document through a sibling temp file and a rename.
///
/// An unreadable or malformed document is treated as empty: persisted
/// settings degrade to defaults rather than failing the caller.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend storing its document at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Map<String, Value> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Map::new(),
            Err(err) => {
                log::warn!("failed to read settings file {}: {err}", self.path.display());
                return Map::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                log::warn!(
                    "settings file {} is malformed, starting empty",
                    self.path.display()
                );
                Map::new()
            }
        }
    }

    fn write_document(&self, doc: &Map<String, Value>) -> Result<(), SettingsError> {
        let bytes =
            serde_json::to_vec_pretty(&Value::Object(doc.clone())).map_err(SettingsError::Serialization)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SettingsBackend for JsonFileBackend {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        match self.read_document().get(key) {
            Some(value) => Ok(Some(
                serde_json::to_vec(value).map_err(SettingsError::Serialization)?,
            )),
            None => Ok(None),
        }
    }

    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError> {
        let value: Value =
            serde_json::from_slice(&value).map_err(SettingsError::Deserialization)?;
        let mut doc = self.read_document();
        doc.insert(key.to_string(), value);
        self.write_document(&doc)
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        let mut doc = self.read_document();
        if doc.remove(key).is_some() {
            self.write_document(&doc)?;
        }
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        Ok(self
            .read_document()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}
