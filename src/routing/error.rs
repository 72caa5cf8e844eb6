use thiserror::Error;

/// Failure outcomes of role and provider mutations.
///
/// Every variant is recovered locally by the caller; the configuration is
/// guaranteed untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("Role '{0}' not found.")]
    RoleNotFound(String),

    #[error("Provider '{0}' not found.")]
    ProviderNotFound(String),

    #[error("Role '{0}' already exists.")]
    RoleExists(String),

    #[error("Provider '{0}' already exists.")]
    ProviderExists(String),

    #[error("Name '{0}' must be kebab-case (lowercase letters, numbers, hyphens).")]
    InvalidName(String),

    #[error("Provider '{0}' is not configured.")]
    UnknownProvider(String),

    #[error("The claude provider cannot be modified or removed.")]
    Protected,

    #[error("Provider '{provider}' is assigned to role '{role}'. Reassign roles before removing.")]
    InUse { provider: String, role: String },

    #[error("Custom providers require a non-empty command.")]
    MissingCommand,
}
