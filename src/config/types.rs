use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved top-level key of the host settings document.
pub const SETTINGS_KEY: &str = "aiArchitect";

/// Name of the protected built-in provider.
pub const CLAUDE_PROVIDER: &str = "claude";

/// Canonical display order for the built-in roles.
pub const ROLE_ORDER: [&str; 4] = ["planning", "architect", "review", "qa"];

/// Root configuration container.
///
/// Lives entirely in memory for the duration of one command invocation;
/// reconstructed on every load by merging the persisted override with the
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub roles: BTreeMap<String, RoleConfig>,
    pub providers: BTreeMap<String, ProviderConfig>,
}

/// Routing entry for a single role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Must name an entry in `Configuration::providers`.
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: CLAUDE_PROVIDER.to_string(),
            description: String::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    CLAUDE_PROVIDER.to_string()
}

/// Closed set of provider kinds. Unknown kinds fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Claude,
    Codex,
    Gemini,
    Command,
}

impl ProviderKind {
    /// Stable wire and display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Codex => "codex",
            Self::Gemini => "gemini",
            Self::Command => "command",
        }
    }
}

/// Backend definition a role can be routed to.
///
/// Tagged by `kind`; each variant carries only the fields meaningful for
/// it, and absent optional fields are omitted on serialization rather
/// than stored as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProviderConfig {
    /// Built-in Claude Code agent. Exempt from edit and removal.
    Claude {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    /// Hosted Codex model.
    Codex {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
    },
    /// Hosted Gemini model.
    Gemini {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
    },
    /// External command template invoked with a prompt.
    Command { command: String },
}

impl ProviderConfig {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Claude { .. } => ProviderKind::Claude,
            Self::Codex { .. } => ProviderKind::Codex,
            Self::Gemini { .. } => ProviderKind::Gemini,
            Self::Command { .. } => ProviderKind::Command,
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            Self::Codex { model } | Self::Gemini { model } => model.as_deref(),
            _ => None,
        }
    }

    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Command { command } => Some(command),
            _ => None,
        }
    }

    pub(crate) fn notes(&self) -> Option<&str> {
        match self {
            Self::Claude { notes } => notes.as_deref(),
            _ => None,
        }
    }
}

impl Default for Configuration {
    /// Built-in default routing: all four canonical roles enabled and
    /// routed to claude; providers claude, codex, gemini.
    fn default() -> Self {
        let mut roles = BTreeMap::new();
        for role in ROLE_ORDER {
            roles.insert(role.to_string(), RoleConfig::default());
        }

        let mut providers = BTreeMap::new();
        providers.insert(
            CLAUDE_PROVIDER.to_string(),
            ProviderConfig::Claude {
                notes: Some("Built-in Claude Code agent".to_string()),
            },
        );
        providers.insert(
            "codex".to_string(),
            ProviderConfig::Codex {
                model: Some("gpt-5.2-codex".to_string()),
            },
        );
        providers.insert(
            "gemini".to_string(),
            ProviderConfig::Gemini {
                model: Some("gemini-1.5-pro".to_string()),
            },
        );

        Self { roles, providers }
    }
}
