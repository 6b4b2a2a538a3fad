//
//  perfrepo-client
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API error conditions.
//!
//! Public client operations return `anyhow::Result` with the operation named
//! in the context chain; the typed condition underneath is an [`ApiError`].
//! Use [`is_not_found`] to branch on a missing entity.
//!
//! # Example
//!
//! ```rust,no_run
//! use perfrepo_client::api::{is_not_found, PerfRepoClient};
//!
//! # async fn example(client: &PerfRepoClient) -> anyhow::Result<()> {
//! match client.get_test(42).await {
//!     Ok(test) => println!("found {}", test.name),
//!     Err(e) if is_not_found(&e) => println!("no such test"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

use crate::xml::XmlError;

/// Typed failure of a PerfRepo request.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `NotFound` | a read answered 200 with an empty body |
/// | `UnexpectedStatus` | the status differs from the operation's success code |
/// | `Network` | the transport failed |
/// | `Xml` | a body could not be encoded or decoded |
/// | `InvalidId` | a create/update body was not a decimal id |
/// | `MissingId` | an update was asked for an unpersisted entity |
/// | `CaFile` | the CA bundle could not be loaded |
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server has no entity at `url`.
    #[error("Entity with given location {url} doesn't exist")]
    NotFound {
        /// Requested URL
        url: String,
    },

    /// The server answered with a status the operation does not accept.
    #[error("URL: {url}, Status: {status}, Response: {body}")]
    UnexpectedStatus {
        /// Requested URL
        url: String,
        /// Status line received
        status: StatusCode,
        /// Response body text
        body: String,
    },

    /// Connection or transfer failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Encoding or decoding of an XML body failed.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// A create/update response did not carry a record id.
    #[error("Invalid record id in response: {body:?}")]
    InvalidId {
        /// Response body text
        body: String,
    },

    /// An update needs the id of a persisted entity.
    #[error("Invalid {entity} for update: id is not set")]
    MissingId {
        /// Entity kind (e.g. "test execution")
        entity: &'static str,
    },

    /// The trusted CA bundle could not be read or parsed.
    #[error("Cannot load CA file {path}: {message}")]
    CaFile {
        /// Path of the bundle
        path: String,
        /// Underlying failure
        message: String,
    },
}

impl ApiError {
    /// The HTTP status of an `UnexpectedStatus` failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Whether `err` (or anything in its context chain) is [`ApiError::NotFound`].
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| matches!(cause.downcast_ref::<ApiError>(), Some(ApiError::NotFound { .. })))
}

/// The [`ApiError`] in `err`'s context chain, if any.
pub fn api_error(err: &anyhow::Error) -> Option<&ApiError> {
    err.chain().find_map(|cause| cause.downcast_ref::<ApiError>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn not_found() -> anyhow::Result<()> {
        Err(ApiError::NotFound {
            url: "http://localhost/rest/test/id/1".to_string(),
        })
        .context("Failed to get test")
    }

    #[test]
    fn test_is_not_found_through_context() {
        let err = not_found().unwrap_err();
        assert!(is_not_found(&err));
        assert_eq!(err.to_string(), "Failed to get test");
        assert!(format!("{:#}", err).contains("doesn't exist"));
    }

    #[test]
    fn test_unexpected_status_is_not_not_found() {
        let err: anyhow::Error = ApiError::UnexpectedStatus {
            url: "http://localhost/rest/test/create".to_string(),
            status: StatusCode::BAD_REQUEST,
            body: "duplicate uid".to_string(),
        }
        .into();
        assert!(!is_not_found(&err));
        assert_eq!(api_error(&err).and_then(ApiError::status), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            err.to_string(),
            "URL: http://localhost/rest/test/create, Status: 400 Bad Request, Response: duplicate uid"
        );
    }

    #[test]
    fn test_plain_error_has_no_api_error() {
        let err = anyhow::anyhow!("boom");
        assert!(!is_not_found(&err));
        assert!(api_error(&err).is_none());
    }
}
