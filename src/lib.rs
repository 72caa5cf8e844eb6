//! Role-to-provider routing configuration for an AI-assistant plugin.
//!
//! Named roles (planning, architect, review, qa, plus user-defined ones)
//! are routed to providers: the built-in Claude agent, hosted models, or
//! external command templates. The assignment persists under one
//! reserved key of the host `.claude/settings.json` document; everything
//! else in that document is preserved verbatim. The engine only stores
//! how a call would be routed, never makes one.

pub mod cli;
pub mod config;
pub mod routing;
pub mod statusline;
pub mod summary;
pub mod validate;
