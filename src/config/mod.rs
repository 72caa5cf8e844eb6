//! Routing configuration: data model, default/override merge, and
//! persistence inside the host settings document.

pub mod merge;
pub mod store;
pub mod types;

pub use merge::ConfigOverlay;
pub use store::{load, save, settings_path, SettingsError};
pub use types::{Configuration, ProviderConfig, ProviderKind, RoleConfig};
