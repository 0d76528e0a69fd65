//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod bean;
mod enums;
mod webhook;

pub use bean::BeanCommands;
pub use enums::EnumCommands;
pub use webhook::WebhookCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect enumeration symbol sets
    Enums {
        #[command(subcommand)]
        command: EnumCommands,
    },
    /// Validate and canonicalize bean payloads
    Bean {
        #[command(subcommand)]
        command: BeanCommands,
    },
    /// Fire webhook triggers
    Webhook {
        #[command(subcommand)]
        command: WebhookCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Enums { command } => enums::handle_enum_command(command),
        Commands::Bean { command } => bean::handle_bean_command(command),
        Commands::Webhook { command } => webhook::handle_webhook_command(command, config).await,
    }
}
