//! Settings-document persistence.
//!
//! The routing configuration occupies one reserved key of the host
//! `.claude/settings.json`; every other key is opaque to this engine and
//! preserved verbatim across saves. Reads are never fatal: absent or
//! unparseable state degrades to the built-in defaults. Writes are
//! all-or-nothing and serialize across processes.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::{Map, Value};
use thiserror::Error;

use super::merge::ConfigOverlay;
use super::types::{Configuration, SETTINGS_KEY};

/// Errors that can occur while writing the settings document.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to create settings directory '{path}': {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to lock settings file '{path}': {source}")]
    LockError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize routing configuration: {source}")]
    SerializeError {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Path of the host settings document under a project root.
pub fn settings_path(root: &Path) -> PathBuf {
    root.join(".claude").join("settings.json")
}

fn lock_path(root: &Path) -> PathBuf {
    root.join(".claude").join("settings.json.lock")
}

/// Read the host document as a JSON object.
///
/// A missing file, an unreadable file, invalid JSON, or a non-object top
/// level all degrade to an empty document.
pub(crate) fn read_document(root: &Path) -> Map<String, Value> {
    let path = settings_path(root);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => return Map::new(),
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(document)) => document,
        Ok(_) | Err(_) => {
            tracing::warn!(
                path = %path.display(),
                "settings file is not a JSON object; treating it as empty"
            );
            Map::new()
        }
    }
}

/// Load the merged configuration for a project root.
///
/// The result always contains every built-in role and provider, whatever
/// the state on disk.
pub fn load(root: &Path) -> Configuration {
    let document = read_document(root);
    let Some(section) = document.get(SETTINGS_KEY) else {
        return Configuration::default();
    };
    match serde_json::from_value::<ConfigOverlay>(section.clone()) {
        Ok(overlay) => Configuration::merged_with_defaults(overlay),
        Err(error) => {
            tracing::warn!(
                %error,
                "stored '{SETTINGS_KEY}' section has an unexpected shape; \
                 prior routing configuration was discarded in favor of defaults"
            );
            Configuration::default()
        }
    }
}

/// Apply a mutation to the host document and write it back.
///
/// The read-modify-write runs under an exclusive advisory lock and the
/// final write is a temp-file rename, so concurrent invocations serialize
/// and readers never observe a partial document. Output form is stable:
/// keys sorted at every level, two-space indentation, trailing newline.
pub(crate) fn update_document<F>(root: &Path, mutate: F) -> Result<(), SettingsError>
where
    F: FnOnce(&mut Map<String, Value>),
{
    let dir = root.join(".claude");
    fs::create_dir_all(&dir).map_err(|source| SettingsError::CreateDirError {
        path: dir.clone(),
        source,
    })?;

    let lock_file = File::create(lock_path(root)).map_err(|source| SettingsError::LockError {
        path: lock_path(root),
        source,
    })?;
    lock_file
        .lock_exclusive()
        .map_err(|source| SettingsError::LockError {
            path: lock_path(root),
            source,
        })?;

    let mut document = read_document(root);
    mutate(&mut document);

    let mut text = serde_json::to_string_pretty(&Value::Object(document))
        .map_err(|source| SettingsError::SerializeError { source })?;
    text.push('\n');

    let path = settings_path(root);
    let mut staged = tempfile::NamedTempFile::new_in(&dir).map_err(|source| {
        SettingsError::WriteError {
            path: path.clone(),
            source,
        }
    })?;
    staged
        .write_all(text.as_bytes())
        .map_err(|source| SettingsError::WriteError {
            path: path.clone(),
            source,
        })?;
    staged
        .persist(&path)
        .map_err(|persist| SettingsError::WriteError {
            path: path.clone(),
            source: persist.error,
        })?;

    Ok(())
}

/// Persist the full configuration under the reserved key.
///
/// Re-reads the current host document first, so unrelated keys written by
/// other tools survive.
pub fn save(root: &Path, configuration: &Configuration) -> Result<(), SettingsError> {
    let value = serde_json::to_value(configuration)
        .map_err(|source| SettingsError::SerializeError { source })?;
    update_document(root, |document| {
        document.insert(SETTINGS_KEY.to_string(), value);
    })
}
