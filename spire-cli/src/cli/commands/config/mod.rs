//! `config` command - manage the Spire credentials file

mod handler;

pub use handler::handle_config_command;

use std::path::PathBuf;

#[derive(clap::Subcommand, Debug)]
pub enum ConfigCommands {
    /// Interactively create the credentials file
    Init {
        /// Write to this path instead of the platform config dir
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Print the active configuration (password redacted)
    Show {
        /// Read from this path instead of the platform config dir
        #[arg(long)]
        path: Option<PathBuf>,
    },
}
