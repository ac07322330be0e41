//! Lookup command handler

use anyhow::Result;
use colored::Colorize;

use super::LookupArgs;
use crate::api::SpireClient;
use crate::config::Config;

pub async fn handle_lookup_command(args: LookupArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let client = SpireClient::new(&config)?;

    let order = match client.find_purchase_order(&args.order).await {
        Ok(order) => order,
        Err(err) => anyhow::bail!("[status {}] {err}", err.status()),
    };

    println!(
        "{} purchase order {} (id {})",
        "found".green().bold(),
        order.number.cyan(),
        order.id
    );
    Ok(())
}
