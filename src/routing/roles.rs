//! Role mutations.
//!
//! Names are validated as kebab-case, provider references are checked
//! against the provider map, and no operation mutates anything before its
//! last check has passed.

use crate::config::types::{Configuration, RoleConfig};
use crate::validate::is_well_formed_name;

use super::error::RoutingError;

impl Configuration {
    /// Create a role routed to the built-in claude provider.
    pub fn add_role(&mut self, name: &str, description: &str) -> Result<(), RoutingError> {
        if !is_well_formed_name(name) {
            return Err(RoutingError::InvalidName(name.to_string()));
        }
        if self.roles.contains_key(name) {
            return Err(RoutingError::RoleExists(name.to_string()));
        }
        self.roles.insert(
            name.to_string(),
            RoleConfig {
                description: description.to_string(),
                ..RoleConfig::default()
            },
        );
        Ok(())
    }

    pub fn remove_role(&mut self, name: &str) -> Result<(), RoutingError> {
        if self.roles.remove(name).is_none() {
            return Err(RoutingError::RoleNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Move a role under a new name, preserving its routing.
    pub fn rename_role(&mut self, old: &str, new: &str) -> Result<(), RoutingError> {
        if !self.roles.contains_key(old) {
            return Err(RoutingError::RoleNotFound(old.to_string()));
        }
        if !is_well_formed_name(new) {
            return Err(RoutingError::InvalidName(new.to_string()));
        }
        if self.roles.contains_key(new) {
            return Err(RoutingError::RoleExists(new.to_string()));
        }
        if let Some(role) = self.roles.remove(old) {
            self.roles.insert(new.to_string(), role);
        }
        Ok(())
    }

    pub fn set_role_enabled(&mut self, name: &str, enabled: bool) -> Result<(), RoutingError> {
        match self.roles.get_mut(name) {
            Some(role) => {
                role.enabled = enabled;
                Ok(())
            }
            None => Err(RoutingError::RoleNotFound(name.to_string())),
        }
    }

    /// Route a role to an existing provider.
    pub fn set_role_provider(&mut self, name: &str, provider: &str) -> Result<(), RoutingError> {
        if !self.roles.contains_key(name) {
            return Err(RoutingError::RoleNotFound(name.to_string()));
        }
        if !self.providers.contains_key(provider) {
            return Err(RoutingError::UnknownProvider(provider.to_string()));
        }
        if let Some(role) = self.roles.get_mut(name) {
            role.provider = provider.to_string();
        }
        Ok(())
    }

    /// Replace a role description verbatim. The content is not validated.
    pub fn set_role_description(&mut self, name: &str, description: &str) -> Result<(), RoutingError> {
        match self.roles.get_mut(name) {
            Some(role) => {
                role.description = description.to_string();
                Ok(())
            }
            None => Err(RoutingError::RoleNotFound(name.to_string())),
        }
    }
}
