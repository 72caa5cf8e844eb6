//! Project status-line hook.
//!
//! Renders the active routing as a one-line summary for the Claude Code
//! status line, and manages the `statusLine` entry of the host settings
//! document that wires the hook up. Only that one key is touched; the
//! rest of the document passes through untouched.

use std::path::Path;

use serde_json::{json, Value};

use crate::config::store::{self, SettingsError};
use crate::config::types::Configuration;
use crate::summary::display_order;

/// Command registered in the host document; the host runs it to produce
/// the status-line text.
const STATUSLINE_COMMAND: &str = "ai-architect statusline show";

const STATUSLINE_KEY: &str = "statusLine";

const ROLE_TITLES: &[(&str, &str)] = &[("qa", "QA")];
const PROVIDER_TITLES: &[(&str, &str)] = &[
    ("claude", "Claude"),
    ("codex", "Codex"),
    ("gemini", "Gemini"),
];

/// Render enabled roles as `"Planning [Claude] | QA [Codex]"`.
///
/// Disabled roles are skipped; an empty configuration renders as the
/// empty string.
pub fn render(configuration: &Configuration) -> String {
    let mut entries = Vec::new();
    for name in display_order(&configuration.roles) {
        let role = &configuration.roles[name];
        if !role.enabled {
            continue;
        }
        entries.push(format!(
            "{} [{}]",
            titleize(name, ROLE_TITLES),
            titleize(&role.provider, PROVIDER_TITLES)
        ));
    }
    entries.join(" | ")
}

fn titleize(name: &str, overrides: &[(&str, &str)]) -> String {
    if let Some((_, title)) = overrides.iter().find(|(key, _)| *key == name) {
        return (*title).to_string();
    }
    name.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn hook_value() -> Value {
    json!({ "type": "command", "command": STATUSLINE_COMMAND })
}

/// Register the hook only if none is configured yet.
///
/// Returns whether anything was written, so callers can stay quiet on
/// the no-op path.
pub fn install(root: &Path) -> Result<bool, SettingsError> {
    if store::read_document(root).contains_key(STATUSLINE_KEY) {
        return Ok(false);
    }
    store::update_document(root, |document| {
        document.insert(STATUSLINE_KEY.to_string(), hook_value());
    })?;
    Ok(true)
}

/// Register or overwrite the hook.
pub fn enable(root: &Path) -> Result<(), SettingsError> {
    store::update_document(root, |document| {
        document.insert(STATUSLINE_KEY.to_string(), hook_value());
    })
}

/// Remove the hook if present. Absent state writes nothing at all.
pub fn disable(root: &Path) -> Result<(), SettingsError> {
    if !store::read_document(root).contains_key(STATUSLINE_KEY) {
        return Ok(());
    }
    store::update_document(root, |document| {
        document.remove(STATUSLINE_KEY);
    })
}
