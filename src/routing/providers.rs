//! Provider mutations.
//!
//! The built-in claude provider is protected: kind-claude entries reject
//! edits, and the entry named `claude` rejects removal. Removal also
//! requires that no role references the provider.

use crate::config::types::{Configuration, ProviderConfig, ProviderKind, CLAUDE_PROVIDER};

use super::error::RoutingError;

impl Configuration {
    /// Define a new provider.
    ///
    /// Only fields meaningful for the kind are stored; a command kind
    /// requires a non-empty command template.
    pub fn add_provider(
        &mut self,
        name: &str,
        kind: ProviderKind,
        model: Option<String>,
        command: Option<String>,
    ) -> Result<(), RoutingError> {
        if name.is_empty() {
            return Err(RoutingError::InvalidName(name.to_string()));
        }
        if self.providers.contains_key(name) {
            return Err(RoutingError::ProviderExists(name.to_string()));
        }
        let provider = match kind {
            ProviderKind::Claude => ProviderConfig::Claude { notes: None },
            ProviderKind::Codex => ProviderConfig::Codex { model },
            ProviderKind::Gemini => ProviderConfig::Gemini { model },
            ProviderKind::Command => {
                let command = command
                    .filter(|command| !command.is_empty())
                    .ok_or(RoutingError::MissingCommand)?;
                ProviderConfig::Command { command }
            }
        };
        self.providers.insert(name.to_string(), provider);
        Ok(())
    }

    /// Update the kind-relevant fields of an existing provider.
    ///
    /// Arguments with no field on the provider's kind are ignored.
    pub fn edit_provider(
        &mut self,
        name: &str,
        model: Option<String>,
        command: Option<String>,
    ) -> Result<(), RoutingError> {
        let Some(provider) = self.providers.get_mut(name) else {
            return Err(RoutingError::ProviderNotFound(name.to_string()));
        };
        match provider {
            ProviderConfig::Claude { .. } => Err(RoutingError::Protected),
            ProviderConfig::Codex { model: current } | ProviderConfig::Gemini { model: current } => {
                if let Some(model) = model {
                    *current = Some(model);
                }
                Ok(())
            }
            ProviderConfig::Command { command: current } => {
                if let Some(command) = command {
                    if command.is_empty() {
                        return Err(RoutingError::MissingCommand);
                    }
                    *current = command;
                }
                Ok(())
            }
        }
    }

    /// Delete a provider that no role references.
    pub fn remove_provider(&mut self, name: &str) -> Result<(), RoutingError> {
        if name == CLAUDE_PROVIDER {
            return Err(RoutingError::Protected);
        }
        if !self.providers.contains_key(name) {
            return Err(RoutingError::ProviderNotFound(name.to_string()));
        }
        // first referencing role in map order, so the error is deterministic
        if let Some(role) = self
            .roles
            .iter()
            .find(|(_, config)| config.provider == name)
            .map(|(role, _)| role)
        {
            return Err(RoutingError::InUse {
                provider: name.to_string(),
                role: role.clone(),
            });
        }
        self.providers.remove(name);
        Ok(())
    }
}
