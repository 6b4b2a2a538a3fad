//
//  perfrepo-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP client for the PerfRepo REST API.
//!
//! ## Architecture
//!
//! - [`client`]: [`PerfRepoClient`], credentials and request plumbing
//! - [`test_definitions`]: tests and metrics
//! - [`executions`]: test executions and search
//! - [`attachments`]: attachment upload and download
//! - [`reports`]: reports and report permissions
//! - [`error`]: [`ApiError`] and [`is_not_found`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use perfrepo_client::api::PerfRepoClient;
//! use perfrepo_client::model::{Comparator, Metric, Test};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = PerfRepoClient::new("http://localhost:8080/testing-repo", "perfrepouser", "perfrepouser1.")?;
//! let test = Test::new("throughput", "perfrepouser", "throughput-uid")
//!     .with_metric(Metric::new("ops", Comparator::HigherBetter));
//! let id = client.create_test(&test).await?;
//! let stored = client.get_test(id).await?;
//! assert_eq!(stored.metrics.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod attachments;
pub mod client;
pub mod error;
pub mod executions;
pub mod reports;
pub mod test_definitions;

pub use attachments::parse_file_name;
pub use client::PerfRepoClient;
pub use error::{api_error, is_not_found, ApiError};
