//
//  perfrepo-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod smoke;

pub use smoke::SmokeCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::PerfRepoClient;
use crate::config::ClientConfig;

#[derive(Parser, Debug)]
#[command(
    name = "perfrepo",
    version,
    about = "Check a PerfRepo server from the command line",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Connection flags; each one overrides the configuration file and the
/// `PERFREPO_*` environment.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// PerfRepo application URL (without /rest)
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[arg(long, global = true)]
    pub user: Option<String>,

    #[arg(long, global = true)]
    pub pass: Option<String>,

    /// PEM CA bundle to verify the server against
    #[arg(long, global = true, value_name = "PATH")]
    pub ca_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Resolves the effective settings: file, then environment, then flags.
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = ClientConfig::load_from(path)?;
                config.apply_overrides(|name| std::env::var(name).ok());
                config
            }
            None => ClientConfig::load()?,
        };
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(user) = &self.user {
            config.user = user.clone();
        }
        if let Some(pass) = &self.pass {
            config.password = pass.clone();
        }
        if let Some(ca_file) = &self.ca_file {
            config.ca_file = Some(ca_file.clone());
        }
        Ok(config)
    }

    pub fn client(&self) -> Result<PerfRepoClient> {
        PerfRepoClient::from_config(&self.resolve_config()?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the server version
    Version,

    /// Create, read back and delete a throwaway test
    Smoke(SmokeCommand),
}

impl Commands {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match self {
            Self::Version => {
                let version = global.client()?.server_version().await?;
                println!("{}", version.trim());
                Ok(())
            }
            Self::Smoke(cmd) => cmd.run(global).await,
        }
    }
}
