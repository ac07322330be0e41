//! `lookup` command - resolve a purchase order by number

mod handler;

pub use handler::handle_lookup_command;

use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Purchase order number (zero-padded to 10 digits automatically)
    pub order: String,

    /// Path to a credentials file (defaults to the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
