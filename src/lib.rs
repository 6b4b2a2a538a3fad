//
//  perfrepo-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # PerfRepo Client Library
//!
//! A typed client for the PerfRepo performance test result repository's
//! REST API, which exchanges XML documents.
//!
//! ## Overview
//!
//! The library covers the full entity lifecycle against one server: tests
//! and their metrics, test executions with search, execution attachments,
//! and reports with their access permissions.
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client and per-resource operations
//! - [`model`]: Wire entities and their XML codecs
//! - [`xml`]: Element tree, reader and writer under the codecs
//! - [`auth`]: Basic authentication
//! - [`config`]: Connection settings (TOML file + environment)
//! - [`fixtures`]: Randomized test data for live runs
//! - [`cli`]: The `perfrepo` smoke-check command line
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use perfrepo_client::{ClientConfig, PerfRepoClient};
//! use perfrepo_client::fixtures::Fixtures;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = PerfRepoClient::from_config(&ClientConfig::load()?)?;
//! let mut fixtures = Fixtures::thread_local();
//!
//! let test_id = client.create_test(&fixtures.test("t1")).await?;
//! let execution_id = client
//!     .create_test_execution(&fixtures.default_execution(test_id))
//!     .await?;
//! println!("execution {} of test {}", execution_id, test_id);
//! # Ok(())
//! # }
//! ```

/// HTTP client for the PerfRepo REST API.
pub mod api;

/// Basic authentication.
pub mod auth;

/// Command-line interface of the `perfrepo` binary.
pub mod cli;

/// Connection settings.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/perfrepo/config.toml`
/// - macOS: `~/Library/Application Support/perfrepo/config.toml`
/// - Windows: `%APPDATA%\perfrepo\config.toml`
pub mod config;

/// Randomized entities for end-to-end runs.
pub mod fixtures;

/// Wire entities and their XML codecs.
pub mod model;

/// Minimal XML element tree.
pub mod xml;

pub use api::{is_not_found, ApiError, PerfRepoClient};
pub use config::ClientConfig;

/// Application name constant.
pub const APP_NAME: &str = "perfrepo";

/// Library version, from Cargo.toml.
///
/// # Example
///
/// ```rust
/// use perfrepo_client::VERSION;
///
/// println!("perfrepo-client {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes of the `perfrepo` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// The requested entity does not exist.
    pub const NOT_FOUND: i32 = 8;
}
