//! Command-line interface definitions

pub mod commands;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::lookup::LookupArgs;
use commands::upload::UploadArgs;

#[derive(Parser)]
#[command(
    name = "spire-cli",
    about = "Import purchase order items into Spire ERP from CSV files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace a purchase order's items with rows from a CSV file
    ///
    /// This OVERWRITES the order's existing items with the file contents.
    Upload(UploadArgs),
    /// Look up a purchase order by number
    Lookup(LookupArgs),
    /// Manage Spire credentials
    #[command(subcommand)]
    Config(ConfigCommands),
}
