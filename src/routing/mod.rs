//! Role and provider registries over the configuration.
//!
//! All operations are atomic: on any failure the configuration is left
//! exactly as it was.

mod error;
mod providers;
mod roles;

pub use error::RoutingError;
