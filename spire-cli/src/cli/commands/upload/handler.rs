//! Upload command handler

use std::fs::File;

use anyhow::{Context, Result};
use colored::Colorize;

use super::UploadArgs;
use crate::api::SpireClient;
use crate::config::Config;
use crate::import::{self, ReplaceItemsPayload, UploadOptions};

pub async fn handle_upload_command(args: UploadArgs) -> Result<()> {
    if !args.file.exists() {
        anyhow::bail!("CSV file does not exist: {}", args.file.display());
    }
    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open CSV file: {}", args.file.display()))?;

    // Dry run: assemble and print the payload, no network traffic at all
    if args.dry {
        let payload = ReplaceItemsPayload::from_items(import::parse_items(file)?);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let config = Config::load(args.config.as_deref())?;
    let client = SpireClient::new(&config)?;
    let options = UploadOptions {
        reconcile_inventory: args.create_items,
    };

    let outcome = match import::upload_order_items(&client, &args.order, file, &options).await {
        Ok(outcome) => outcome,
        Err(err) => anyhow::bail!("[status {}] {err}", err.status()),
    };

    for warning in &outcome.warnings {
        println!("{} {warning}", "warning:".yellow().bold());
    }
    println!(
        "{} purchase order {} now has {} item(s)",
        "updated".green().bold(),
        outcome.order_number.cyan(),
        outcome.item_count
    );
    Ok(())
}
