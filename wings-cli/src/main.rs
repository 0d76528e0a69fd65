//! Wings CLI
//!
//! Command-line interface for inspecting the platform's beans and firing
//! webhook triggers against a manager.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "wings")]
#[command(about = "Wings deployment platform CLI", long_about = None)]
struct Cli {
    /// Manager URL
    #[arg(
        long,
        global = true,
        env = "WINGS_MANAGER_URL",
        default_value = "http://localhost:9090"
    )]
    manager_url: String,

    /// API key sent with webhook requests
    #[arg(long, global = true, env = "WINGS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so canonical JSON on stdout stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wings_cli=info,wings_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        manager_url: cli.manager_url,
        api_key: cli.api_key,
        timeout_secs: cli.timeout,
    };

    handle_command(cli.command, &config).await
}
