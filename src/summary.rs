//! Deterministic rendering of the routing configuration.

use std::collections::BTreeMap;

use crate::config::types::{Configuration, ProviderConfig, RoleConfig, ROLE_ORDER};

/// Role names in display order: the canonical built-in order first, then
/// any remaining roles alphabetically.
pub fn display_order(roles: &BTreeMap<String, RoleConfig>) -> Vec<&str> {
    let mut names: Vec<&str> = ROLE_ORDER
        .iter()
        .copied()
        .filter(|name| roles.contains_key(*name))
        .collect();
    names.extend(
        roles
            .keys()
            .map(String::as_str)
            .filter(|name| !ROLE_ORDER.contains(name)),
    );
    names
}

/// Render the full configuration as a fixed text block.
///
/// Pure function of the configuration: identical input yields identical
/// output, independent of internal map order.
pub fn summarize(configuration: &Configuration) -> String {
    let mut lines = vec!["Roles:".to_string()];
    for name in display_order(&configuration.roles) {
        let role = &configuration.roles[name];
        let enabled = if role.enabled { "on" } else { "off" };
        lines.push(format!("- {name}: {enabled} (provider: {})", role.provider));
    }

    lines.push("Providers:".to_string());
    for (name, provider) in &configuration.providers {
        lines.push(format!(
            "- {name} ({}){}",
            provider.kind().as_str(),
            provider_details(provider)
        ));
    }

    lines.join("\n")
}

fn provider_details(provider: &ProviderConfig) -> String {
    let mut extras = Vec::new();
    if let Some(model) = provider.model() {
        extras.push(format!("model={model}"));
    }
    if let Some(command) = provider.command() {
        extras.push(format!("command={command}"));
    }
    if extras.is_empty() {
        String::new()
    } else {
        format!(" ({})", extras.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_defaults_in_canonical_order() {
        let configuration = Configuration::default();
        let text = summarize(&configuration);

        let expected = "\
Roles:
- planning: on (provider: claude)
- architect: on (provider: claude)
- review: on (provider: claude)
- qa: on (provider: claude)
Providers:
- claude (claude)
- codex (codex) (model=gpt-5.2-codex)
- gemini (gemini) (model=gemini-1.5-pro)";
        assert_eq!(text, expected);
    }

    #[test]
    fn unrecognized_roles_sort_after_builtins() {
        let mut configuration = Configuration::default();
        configuration.add_role("zz-top", "").unwrap();
        configuration.add_role("aa-first", "").unwrap();

        let order = display_order(&configuration.roles);
        assert_eq!(
            order,
            vec!["planning", "architect", "review", "qa", "aa-first", "zz-top"]
        );
    }

    #[test]
    fn disabled_role_shows_off() {
        let mut configuration = Configuration::default();
        configuration.set_role_enabled("qa", false).unwrap();

        assert!(summarize(&configuration).contains("- qa: off (provider: claude)"));
    }

    #[test]
    fn command_provider_shows_template() {
        let mut configuration = Configuration::default();
        configuration
            .add_provider(
                "local",
                crate::config::types::ProviderKind::Command,
                None,
                Some("./run.sh {prompt}".to_string()),
            )
            .unwrap();

        assert!(summarize(&configuration).contains("- local (command) (command=./run.sh {prompt})"));
    }
}
