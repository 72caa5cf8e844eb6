//! Typed default/override merge.
//!
//! The persisted sub-document deserializes into overlay types whose
//! fields are all optional; merging applies present fields over the
//! built-in defaults, struct by struct. Unknown keys inside an overlay
//! are ignored; an unknown provider kind fails the whole overlay at the
//! deserialization boundary.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::types::{Configuration, ProviderConfig, ProviderKind};

/// Partial configuration as persisted under the reserved settings key.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigOverlay {
    #[serde(default)]
    pub roles: BTreeMap<String, RoleOverlay>,
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderOverlay>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoleOverlay {
    pub enabled: Option<bool>,
    pub provider: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderOverlay {
    pub kind: Option<ProviderKind>,
    pub model: Option<String>,
    pub command: Option<String>,
    pub notes: Option<String>,
}

impl Configuration {
    /// Merge a persisted overlay over the built-in defaults.
    ///
    /// The result is total: every built-in role and provider exists even
    /// when the overlay predates it. Merging the serialized result back
    /// in yields the same configuration.
    pub fn merged_with_defaults(overlay: ConfigOverlay) -> Self {
        let mut configuration = Configuration::default();

        for (name, role) in overlay.roles {
            let entry = configuration.roles.entry(name).or_default();
            if let Some(enabled) = role.enabled {
                entry.enabled = enabled;
            }
            if let Some(provider) = role.provider {
                entry.provider = provider;
            }
            if let Some(description) = role.description {
                entry.description = description;
            }
        }

        for (name, provider) in overlay.providers {
            match merge_provider(configuration.providers.get(&name), provider) {
                Some(merged) => {
                    configuration.providers.insert(name, merged);
                }
                None => {
                    tracing::warn!(provider = %name, "discarding provider override without a usable kind");
                }
            }
        }

        configuration
    }
}

/// Apply an overlay entry over an optional default entry.
///
/// Fields are inherited from the default only when the kinds match; a
/// kind change rebuilds the entry from the overlay alone. An overlay
/// that cannot produce a valid entry keeps the default if one exists.
fn merge_provider(base: Option<&ProviderConfig>, overlay: ProviderOverlay) -> Option<ProviderConfig> {
    let base_kind = base.map(ProviderConfig::kind);
    let kind = overlay.kind.or(base_kind)?;
    let inherited = base.filter(|_| base_kind == Some(kind));

    let model = overlay
        .model
        .or_else(|| inherited.and_then(|provider| provider.model().map(str::to_owned)));
    let command = overlay
        .command
        .or_else(|| inherited.and_then(|provider| provider.command().map(str::to_owned)));
    let notes = overlay
        .notes
        .or_else(|| inherited.and_then(|provider| provider.notes().map(str::to_owned)));

    match kind {
        ProviderKind::Claude => Some(ProviderConfig::Claude { notes }),
        ProviderKind::Codex => Some(ProviderConfig::Codex { model }),
        ProviderKind::Gemini => Some(ProviderConfig::Gemini { model }),
        ProviderKind::Command => match command {
            Some(command) if !command.is_empty() => Some(ProviderConfig::Command { command }),
            _ => base.cloned(),
        },
    }
}
