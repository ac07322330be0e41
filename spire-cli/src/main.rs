//! spire-cli entry point
//!
//! Credentials and logging are initialized once here; everything else is
//! dispatched to the per-command handlers under `cli/commands/`.

mod api;
mod cli;
mod config;
mod error;
mod import;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Upload(args) => cli::commands::upload::handle_upload_command(args).await,
        Commands::Lookup(args) => cli::commands::lookup::handle_lookup_command(args).await,
        Commands::Config(command) => cli::commands::config::handle_config_command(command),
    }
}
