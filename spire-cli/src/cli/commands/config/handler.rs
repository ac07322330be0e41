//! Config command handler

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Input;

use super::ConfigCommands;
use crate::config::Config;

pub fn handle_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Init { path } => init(path.as_deref()),
        ConfigCommands::Show { path } => show(path.as_deref()),
    }
}

fn init(path: Option<&Path>) -> Result<()> {
    let root_url: String = Input::new()
        .with_prompt("Spire API root URL (e.g. https://spire.example.com:10880/api/v2/companies/acme)")
        .interact_text()
        .context("Failed to read API root URL")?;
    let username: String = Input::new()
        .with_prompt("Username")
        .interact_text()
        .context("Failed to read username")?;
    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    let config = Config {
        root_url,
        username,
        password,
    };
    let written = config.store(path)?;
    println!(
        "{} credentials written to {}",
        "ok".green().bold(),
        written.display()
    );
    Ok(())
}

fn show(path: Option<&Path>) -> Result<()> {
    let config = Config::load(path)?;
    // Debug impl redacts the password
    println!("{config:#?}");
    Ok(())
}
