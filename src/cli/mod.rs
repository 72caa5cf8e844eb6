//! Command-line surface.
//!
//! Thin shell over the engine: each invocation loads the merged
//! configuration, performs at most one mutation, and persists only on
//! success. Rejected mutations print their message and exit with status
//! 2, leaving the stored document untouched.

pub mod menu;
pub mod root;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::types::ProviderKind;
use crate::config::{self, Configuration};
use crate::routing::RoutingError;
use crate::statusline;
use crate::summary::summarize;

/// Exit code for rejected mutations.
const EXIT_FAILURE: i32 = 2;

const AUTH_HELP: &str = "\
Codex auth options:
- Interactive login: codex login
- Device auth: codex login --device-auth
- API key: printenv OPENAI_API_KEY | codex login --with-api-key

Gemini auth options (from gemini-cli README):
- Login with Google (OAuth): run 'gemini' and choose Login with Google
- Gemini API key: export GEMINI_API_KEY=... then run 'gemini'
- Vertex AI: export GOOGLE_API_KEY=... and GOOGLE_GENAI_USE_VERTEXAI=true

Custom providers:
- Provide a command that accepts a prompt argument, or use {prompt} placeholder.
- Example: mycli --prompt '{prompt}'";

#[derive(Debug, Parser)]
#[command(name = "ai-architect", about = "Manage AI routing settings", version)]
pub struct Cli {
    /// Project root (default: CLAUDE_PROJECT_DIR, else the nearest
    /// ancestor containing .claude)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current routing configuration
    Summary,
    /// Show authentication guidance for providers
    AuthHelp,
    /// Show a fast menu
    Menu {
        #[arg(value_enum)]
        section: MenuSection,
    },
    /// Manage roles
    Role {
        #[command(subcommand)]
        command: RoleCommand,
    },
    /// Manage providers
    Provider {
        #[command(subcommand)]
        command: ProviderCommand,
    },
    /// Manage the project status-line hook
    Statusline {
        #[command(subcommand)]
        command: StatuslineCommand,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MenuSection {
    Main,
    Help,
    Roles,
    Providers,
    Settings,
}

impl MenuSection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Help => "help",
            Self::Roles => "roles",
            Self::Providers => "providers",
            Self::Settings => "settings",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// List roles
    List,
    /// Add a role routed to claude
    Add {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Remove a role
    Remove { name: String },
    /// Rename a role, keeping its routing
    Rename { old: String, new: String },
    /// Enable a role
    Enable { name: String },
    /// Disable a role
    Disable { name: String },
    /// Route a role to a provider
    SetProvider { name: String, provider: String },
    /// Replace a role description
    SetDescription { name: String, description: String },
}

#[derive(Debug, Subcommand)]
pub enum ProviderCommand {
    /// List providers
    List,
    /// Add a provider
    Add {
        name: String,
        #[arg(value_enum)]
        kind: KindArg,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        command: Option<String>,
    },
    /// Edit a provider's model or command
    Edit {
        name: String,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        command: Option<String>,
    },
    /// Remove a provider no role references
    Remove { name: String },
}

/// Provider kinds creatable from the command line. The built-in claude
/// kind is deliberately absent.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Codex,
    Gemini,
    Command,
}

impl From<KindArg> for ProviderKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Codex => ProviderKind::Codex,
            KindArg::Gemini => ProviderKind::Gemini,
            KindArg::Command => ProviderKind::Command,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum StatuslineCommand {
    /// Print the status line for the current routing
    Show,
    /// Register the status-line hook if absent
    Install,
    /// Register or overwrite the status-line hook
    Enable,
    /// Remove the status-line hook
    Disable,
}

/// Execute a parsed invocation and return the process exit code.
pub fn run(cli: Cli) -> anyhow::Result<i32> {
    let root = cli.root.unwrap_or_else(root::discover_project_root);

    match cli.command {
        Command::Summary => {
            println!("{}", summarize(&config::load(&root)));
            Ok(0)
        }
        Command::AuthHelp => {
            println!("{AUTH_HELP}");
            Ok(0)
        }
        Command::Menu { section } => {
            let plugin_root = root::discover_plugin_root();
            println!("{}", menu::menu_text(&plugin_root, section.as_str()));
            match section {
                MenuSection::Roles => {
                    println!("{}", menu::roles_listing(&config::load(&root)));
                }
                MenuSection::Providers => {
                    println!("{}", menu::providers_listing(&config::load(&root)));
                }
                _ => {}
            }
            Ok(0)
        }
        Command::Role { command } => {
            let mut configuration = config::load(&root);
            let outcome = match command {
                RoleCommand::List => {
                    println!("{}", summarize(&configuration));
                    return Ok(0);
                }
                RoleCommand::Add { name, description } => {
                    configuration.add_role(&name, &description)
                }
                RoleCommand::Remove { name } => configuration.remove_role(&name),
                RoleCommand::Rename { old, new } => configuration.rename_role(&old, &new),
                RoleCommand::Enable { name } => configuration.set_role_enabled(&name, true),
                RoleCommand::Disable { name } => configuration.set_role_enabled(&name, false),
                RoleCommand::SetProvider { name, provider } => {
                    configuration.set_role_provider(&name, &provider)
                }
                RoleCommand::SetDescription { name, description } => {
                    configuration.set_role_description(&name, &description)
                }
            };
            finish_mutation(&root, configuration, outcome)
        }
        Command::Provider { command } => {
            let mut configuration = config::load(&root);
            let outcome = match command {
                ProviderCommand::List => {
                    println!("{}", summarize(&configuration));
                    return Ok(0);
                }
                ProviderCommand::Add {
                    name,
                    kind,
                    model,
                    command,
                } => configuration.add_provider(&name, kind.into(), model, command),
                ProviderCommand::Edit {
                    name,
                    model,
                    command,
                } => configuration.edit_provider(&name, model, command),
                ProviderCommand::Remove { name } => configuration.remove_provider(&name),
            };
            finish_mutation(&root, configuration, outcome)
        }
        Command::Statusline { command } => match command {
            StatuslineCommand::Show => {
                println!("{}", statusline::render(&config::load(&root)));
                Ok(0)
            }
            StatuslineCommand::Install => {
                let installed =
                    statusline::install(&root).context("failed to register status line")?;
                if installed {
                    println!("Statusline enabled for this project.");
                }
                Ok(0)
            }
            StatuslineCommand::Enable => {
                statusline::enable(&root).context("failed to register status line")?;
                println!("Statusline enabled for this project.");
                Ok(0)
            }
            StatuslineCommand::Disable => {
                statusline::disable(&root).context("failed to remove status line")?;
                println!("Statusline disabled for this project.");
                Ok(0)
            }
        },
    }
}

/// Persist and summarize on success; report and leave stored state alone
/// on rejection.
fn finish_mutation(
    root: &Path,
    configuration: Configuration,
    outcome: Result<(), RoutingError>,
) -> anyhow::Result<i32> {
    match outcome {
        Ok(()) => {
            config::save(root, &configuration).context("failed to save settings")?;
            println!("{}", summarize(&configuration));
            Ok(0)
        }
        Err(error) => {
            eprintln!("{error}");
            Ok(EXIT_FAILURE)
        }
    }
}
