//! Shared test utilities.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

/// Create a temp project root containing an empty `.claude` directory.
pub fn temp_root() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    std::fs::create_dir_all(dir.path().join(".claude")).expect("failed to create .claude");
    dir
}

/// Read the raw settings document for a root.
pub fn raw_settings(root: &Path) -> String {
    std::fs::read_to_string(root.join(".claude").join("settings.json"))
        .expect("settings file should exist")
}

/// Write a raw settings document for a root.
pub fn write_settings(root: &Path, content: &str) {
    let dir = root.join(".claude");
    std::fs::create_dir_all(&dir).expect("failed to create .claude");
    std::fs::write(dir.join("settings.json"), content).expect("failed to write settings");
}
