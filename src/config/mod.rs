//
//  perfrepo-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Connection settings for a PerfRepo server, read from a TOML file in the
//! platform configuration directory and overridden by environment variables.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/perfrepo/config.toml`
//! - **macOS**: `~/Library/Application Support/perfrepo/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\perfrepo\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! url = "https://perfrepo.example.com/testing-repo"
//! user = "perfrepouser"
//! password = "perfrepouser1."
//! ca_file = "/etc/pki/perfrepo-ca.pem"
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PERFREPO_URL` | `url` |
//! | `PERFREPO_USER` | `user` |
//! | `PERFREPO_PASS` | `password` |
//! | `PERFREPO_CA_FILE` | `ca_file` |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application URL used when nothing is configured.
pub const DEFAULT_URL: &str = "http://localhost:8080/testing-repo";
/// User used when nothing is configured.
pub const DEFAULT_USER: &str = "perfrepouser";
/// Password used when nothing is configured.
pub const DEFAULT_PASSWORD: &str = "perfrepouser1.";

/// Connection settings.
///
/// # Examples
///
/// ```rust
/// use perfrepo_client::config::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.url, "http://localhost:8080/testing-repo");
/// assert!(config.ca_file.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Application URL; the REST root is `{url}/rest`
    pub url: String,
    /// User name for Basic authentication
    pub user: String,
    /// Password for Basic authentication
    pub password: String,
    /// PEM CA bundle to verify the server against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            ca_file: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("ca_file", &self.ca_file)
            .finish()
    }
}

impl ClientConfig {
    /// Loads the configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used. Environment
    /// overrides are applied last.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Loads the configuration from `path`, without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Returns the path of the default configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "perfrepo")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replaces fields whose override variable `lookup` returns.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());
        if let Some(url) = lookup("PERFREPO_URL") {
            self.url = url;
        }
        if let Some(user) = lookup("PERFREPO_USER") {
            self.user = user;
        }
        if let Some(password) = lookup("PERFREPO_PASS") {
            self.password = password;
        }
        if let Some(ca_file) = lookup("PERFREPO_CA_FILE") {
            self.ca_file = Some(PathBuf::from(ca_file));
        }
    }
}
