//! Spire credentials and API root configuration
//!
//! Loaded once at process start from `SPIRE_*` environment variables or a
//! TOML file under the platform config dir, and treated as read-only for
//! the rest of the process. The password is redacted from `Debug` output
//! so it can never end up in logs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const ROOT_URL_VAR: &str = "SPIRE_ROOT_URL";
pub const USERNAME_VAR: &str = "SPIRE_USERNAME";
pub const PASSWORD_VAR: &str = "SPIRE_PASSWORD";

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// API root, e.g. `https://spire.example.com:10880/api/v2/companies/acme`
    pub root_url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Load credentials, preferring the environment over the file.
    ///
    /// All three `SPIRE_*` variables must be set for the environment to
    /// win; otherwise the TOML file at `path` (or the default location)
    /// is read.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let (Ok(root_url), Ok(username), Ok(password)) = (
            std::env::var(ROOT_URL_VAR),
            std::env::var(USERNAME_VAR),
            std::env::var(PASSWORD_VAR),
        ) {
            return Ok(Self {
                root_url,
                username,
                password,
            }
            .normalized());
        }

        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_path()?,
        };
        let raw = fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read credentials file: {} (run `spire-cli config init` to create it)",
                path.display()
            )
        })?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Invalid credentials file: {}", path.display()))?;
        if config.root_url.trim().is_empty() || config.username.trim().is_empty() {
            bail!(
                "Credentials file {} is missing root_url or username",
                path.display()
            );
        }
        Ok(config.normalized())
    }

    /// Write the credentials to `path` (or the default location),
    /// creating parent directories as needed. Returns the path written.
    pub fn store(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_path()?,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("Failed to serialize credentials")?;
        fs::write(&path, raw)
            .with_context(|| format!("Failed to write credentials file: {}", path.display()))?;
        Ok(path)
    }

    /// Strip trailing slashes so URL joins are uniform.
    fn normalized(mut self) -> Self {
        while self.root_url.ends_with('/') {
            self.root_url.pop();
        }
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("root_url", &self.root_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the platform config directory")?;
    Ok(dir.join("spire-cli").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            root_url: "https://spire.example.com:10880/api/v2/companies/acme".into(),
            username: "importer".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn test_normalized_strips_trailing_slashes() {
        let config = Config {
            root_url: "https://spire.example.com/api/v2/companies/acme///".into(),
            ..sample()
        }
        .normalized();
        assert_eq!(
            config.root_url,
            "https://spire.example.com/api/v2/companies/acme"
        );
    }

    #[test]
    fn test_normalized_is_idempotent() {
        let config = sample().normalized();
        assert_eq!(config.root_url, sample().root_url);
    }

    #[test]
    fn test_toml_round_trip() {
        let raw = toml::to_string_pretty(&sample()).unwrap();
        let parsed: Config = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.root_url, sample().root_url);
        assert_eq!(parsed.username, "importer");
        assert_eq!(parsed.password, "hunter2");
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("importer"));
    }
}
