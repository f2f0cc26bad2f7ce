use serde::{Deserialize, Serialize};
use simplelog::{Config, LevelFilter, SimpleLogger};

use gridkit::settings::{JsonFileBackend, MemoryBackend, SettingsProvider};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Theme {
    name: String,
    dark: bool,
}

#[test]
fn test_memory_backend_typed_round_trip() {
    let settings = SettingsProvider::new(MemoryBackend::new());
    let theme = Theme {
        name: "slate".to_string(),
        dark: true,
    };

    settings.set("ui.theme", &theme).unwrap();
    assert_eq!(settings.get::<Theme>("ui.theme").unwrap(), Some(theme));
    assert_eq!(settings.get::<Theme>("ui.missing").unwrap(), None);
}

#[test]
fn test_get_or_falls_back_to_default() {
    let settings = SettingsProvider::new(MemoryBackend::new());
    assert_eq!(settings.get_or("ui.page_size", 25usize).unwrap(), 25);

    settings.set("ui.page_size", &50usize).unwrap();
    assert_eq!(settings.get_or("ui.page_size", 25usize).unwrap(), 50);
}

#[test]
fn test_delete_removes_the_key() {
    let settings = SettingsProvider::new(MemoryBackend::new());
    settings.set("ui.page_size", &10usize).unwrap();
    settings.delete("ui.page_size").unwrap();
    assert_eq!(settings.get::<usize>("ui.page_size").unwrap(), None);

    // Deleting an absent key is not an error.
    settings.delete("ui.page_size").unwrap();
}

#[test]
fn test_keys_with_prefix() {
    let settings = SettingsProvider::new(MemoryBackend::new());
    settings.set("table.state.jobs", &1usize).unwrap();
    settings.set("table.state.users", &2usize).unwrap();
    settings.set("ui.theme", &3usize).unwrap();

    let mut keys = settings.keys_with_prefix("table.state.").unwrap();
    keys.sort();
    assert_eq!(keys, vec!["table.state.jobs", "table.state.users"]);
}

#[test]
fn test_json_file_backend_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = SettingsProvider::new(JsonFileBackend::new(&path));
    settings.set("ui.page_size", &50usize).unwrap();
    settings
        .set(
            "ui.theme",
            &Theme {
                name: "slate".to_string(),
                dark: false,
            },
        )
        .unwrap();

    let reopened = SettingsProvider::new(JsonFileBackend::new(&path));
    assert_eq!(reopened.get::<usize>("ui.page_size").unwrap(), Some(50));
    assert_eq!(
        reopened.get::<Theme>("ui.theme").unwrap(),
        Some(Theme {
            name: "slate".to_string(),
            dark: false,
        })
    );
}

#[test]
fn test_json_file_backend_writes_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = SettingsProvider::new(JsonFileBackend::new(&path));
    settings.set("a", &1usize).unwrap();
    settings.set("b", &2usize).unwrap();
    settings.delete("a").unwrap();

    let doc: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc, serde_json::json!({ "b": 2 }));
}

#[test]
fn test_json_file_backend_missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let settings = SettingsProvider::new(JsonFileBackend::new(dir.path().join("none.json")));
    assert_eq!(settings.get::<usize>("anything").unwrap(), None);
    assert!(settings.keys_with_prefix("").unwrap().is_empty());
}

#[test]
fn test_json_file_backend_malformed_file_reads_empty() {
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, b"{ this is not json").unwrap();

    let settings = SettingsProvider::new(JsonFileBackend::new(&path));
    assert_eq!(settings.get::<usize>("anything").unwrap(), None);

    // Writing recovers the file into a valid document.
    settings.set("a", &1usize).unwrap();
    let reopened = SettingsProvider::new(JsonFileBackend::new(&path));
    assert_eq!(reopened.get::<usize>("a").unwrap(), Some(1));
}
