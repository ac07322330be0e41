//! `upload` command - replace a purchase order's items from a CSV file

mod handler;

pub use handler::handle_upload_command;

use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct UploadArgs {
    /// Purchase order number (zero-padded to 10 digits automatically)
    pub order: String,

    /// CSV file with Part No and Order Qty columns (Unit Price and
    /// Description are optional)
    pub file: PathBuf,

    /// Create inventory items that are missing from the Spire catalog
    #[arg(long)]
    pub create_items: bool,

    /// Print the assembled replace payload without calling Spire
    #[arg(long)]
    pub dry: bool,

    /// Path to a credentials file (defaults to the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
