use pretty_assertions::assert_eq;
use std::fs;
use word_complete_settings::{SettingsError, SettingsStore};

#[test]
fn test_load_dir_reads_defaults_and_language_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("word_complete.sublime-settings"),
        include_str!("fixtures/word_complete.sublime-settings"),
    )
    .unwrap();
    fs::write(
        dir.path().join("Python.sublime-settings"),
        include_str!("fixtures/Python.sublime-settings"),
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not settings").unwrap();

    let mut store = SettingsStore::new();
    let loaded = store.load_dir(dir.path()).unwrap();

    assert_eq!(loaded, 2);
    assert_eq!(
        store.user("Python").map(|s| s.autocomplete.clone()),
        Some(vec![
            "self".to_string(),
            "super".to_string(),
            "return".to_string()
        ])
    );
    assert_eq!(store.static_candidates("HTML"), vec!["body", "head", "html"]);
}

#[test]
fn test_load_dir_skips_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("Rust.yml"), "autocomplete: [impl, pub]\n").unwrap();

    let mut store = SettingsStore::new();
    assert_eq!(store.load_dir(dir.path()).unwrap(), 1);
    assert!(store.user("Broken").is_none());
    assert_eq!(store.static_candidates("Rust"), vec!["impl", "pub"]);
}

#[test]
fn test_load_path_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Python.toml");
    fs::write(&path, "autocomplete = []").unwrap();

    let mut store = SettingsStore::new();
    let err = store.load_path(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFile(_)));
}

#[test]
fn test_load_dir_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SettingsStore::new();
    let err = store.load_dir(dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}
