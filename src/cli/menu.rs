//! Static menu display and numbered listings.
//!
//! Menu text lives in `menu/<section>.md` under the plugin root; a
//! missing file is tolerated and replaced with a placeholder block.

use std::fs;
use std::path::Path;

use crate::config::types::Configuration;

/// Menu text for a section, or a placeholder when the file is missing.
pub fn menu_text(plugin_root: &Path, section: &str) -> String {
    let path = plugin_root.join("menu").join(format!("{section}.md"));
    match fs::read_to_string(&path) {
        Ok(text) => text.trim_end().to_string(),
        Err(_) => format!("== {} ==\n(missing menu template)\n==========", title(section)),
    }
}

fn title(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Numbered role listing for the roles menu section, sorted by name.
pub fn roles_listing(configuration: &Configuration) -> String {
    if configuration.roles.is_empty() {
        return "1. (no roles configured)".to_string();
    }
    let mut lines = Vec::new();
    for (index, (name, role)) in configuration.roles.iter().enumerate() {
        let enabled = if role.enabled { "on" } else { "off" };
        let suffix = if role.description.is_empty() {
            String::new()
        } else {
            format!(" - {}", role.description)
        };
        lines.push(format!(
            "{}. {name} [{enabled}] ({}){suffix}",
            index + 1,
            role.provider
        ));
    }
    lines.join("\n")
}

/// Numbered provider listing for the providers menu section, sorted by
/// name.
pub fn providers_listing(configuration: &Configuration) -> String {
    if configuration.providers.is_empty() {
        return "1. (no providers configured)".to_string();
    }
    let mut lines = Vec::new();
    for (index, (name, provider)) in configuration.providers.iter().enumerate() {
        let mut extras = Vec::new();
        if let Some(model) = provider.model() {
            extras.push(format!("model={model}"));
        }
        if let Some(command) = provider.command() {
            extras.push(format!("command={command}"));
        }
        let extra_text = if extras.is_empty() {
            String::new()
        } else {
            format!("; {}", extras.join(", "))
        };
        lines.push(format!(
            "{}. {name} ({}{extra_text})",
            index + 1,
            provider.kind().as_str()
        ));
    }
    lines.join("\n")
}
