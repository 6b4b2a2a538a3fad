//
//  perfrepo-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the PerfRepo REST API
//!
//! [`PerfRepoClient`] owns the transport, the REST root and the Basic
//! credentials. Resource operations live in sibling modules
//! ([`test_definitions`](super::test_definitions),
//! [`executions`](super::executions), [`attachments`](super::attachments),
//! [`reports`](super::reports)); this module holds the request plumbing they
//! share.
//!
//! ## Request conventions
//!
//! - every request carries `Authorization: Basic ...`
//! - XML bodies are posted as `Content-Type: text/xml`, 4-space indented
//! - each operation accepts exactly one success status; anything else is an
//!   [`ApiError::UnexpectedStatus`] carrying URL, status line and body
//! - a read answered with 200 and an empty body is [`ApiError::NotFound`]
//! - create/update responses are the new record id as decimal text

use std::path::Path;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Certificate, Client, Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::error::ApiError;
use crate::auth::BasicAuth;
use crate::config::ClientConfig;
use crate::xml::{self, Element, FromXml};

/// Content type of every XML request body.
pub(crate) const XML_CONTENT_TYPE: &str = "text/xml";

/// Client for one PerfRepo server.
///
/// The client holds no mutable state; it can be shared behind an `Arc` and
/// used from several tasks at once, as far as `reqwest::Client` allows.
///
/// # Example
///
/// ```rust,no_run
/// use perfrepo_client::api::PerfRepoClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = PerfRepoClient::new(
///     "http://localhost:8080/testing-repo",
///     "perfrepouser",
///     "perfrepouser1.",
/// )?;
/// println!("server {}", client.server_version().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PerfRepoClient {
    /// The underlying HTTP client
    http: Client,
    /// REST root, `{url}/rest`
    base_url: String,
    /// Credentials sent with every request
    auth: BasicAuth,
}

impl PerfRepoClient {
    /// Creates a client for the application at `url`.
    ///
    /// Server certificates are not verified; the client targets test
    /// deployments that commonly run with self-signed certificates. Use
    /// [`with_ca_file`](Self::with_ca_file) to verify against a known CA.
    ///
    /// # Errors
    ///
    /// Fails when `url` is not an absolute URL or the transport cannot be built.
    pub fn new(url: &str, user: &str, password: &str) -> Result<Self> {
        let http = Self::http_builder()
            .danger_accept_invalid_certs(true)
            .build()
            .context("Failed to create HTTP client")?;
        Self::with_http_client(http, url, user, password)
    }

    /// Creates a client that trusts the PEM CA bundle at `ca_file`.
    ///
    /// # Errors
    ///
    /// Fails when the bundle cannot be read or parsed, or as [`new`](Self::new).
    pub fn with_ca_file(
        url: &str,
        user: &str,
        password: &str,
        ca_file: impl AsRef<Path>,
    ) -> Result<Self> {
        let certificate = load_certificate(ca_file.as_ref())?;
        let http = Self::http_builder()
            .add_root_certificate(certificate)
            .build()
            .context("Failed to create HTTP client")?;
        Self::with_http_client(http, url, user, password)
    }

    /// Creates a client on a caller-built transport.
    pub fn with_http_client(http: Client, url: &str, user: &str, password: &str) -> Result<Self> {
        Ok(Self {
            http,
            base_url: rest_root(url)?,
            auth: BasicAuth::new(user, password),
        })
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        match &config.ca_file {
            Some(ca_file) => Self::with_ca_file(&config.url, &config.user, &config.password, ca_file),
            None => Self::new(&config.url, &config.user, &config.password),
        }
    }

    fn http_builder() -> reqwest::ClientBuilder {
        Client::builder().user_agent(format!("perfrepo-client/{}", crate::VERSION))
    }

    /// The REST root every endpoint hangs off (`{url}/rest`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The user the client authenticates as.
    pub fn username(&self) -> &str {
        self.auth.username()
    }

    /// Returns the server's version string (`GET /info/version`).
    pub async fn server_version(&self) -> Result<String> {
        let (_, body) = self
            .get_raw("/info/version")
            .await
            .context("Failed to get server version")?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts an authenticated request to `path` under the REST root.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.endpoint(path));
        self.auth.apply_to_request(request)
    }

    /// Sends `request` and accepts only the `expected` status.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> Result<Response, ApiError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();
        debug!(%method, %url, "Sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!(%method, %url, %status, "Received response");

        if status != expected {
            let body = response.text().await.unwrap_or_default();
            warn!(%method, %url, %status, %expected, "Unexpected response status");
            return Err(ApiError::UnexpectedStatus { url, status, body });
        }
        Ok(response)
    }

    /// Posts an XML document, expecting `expected`.
    pub(crate) async fn post_expecting(
        &self,
        path: &str,
        element: &Element,
        expected: StatusCode,
    ) -> Result<Response, ApiError> {
        let body = xml::write_document(element)?;
        let request = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .body(body);
        self.execute(request, expected).await
    }

    /// Posts an XML document to a create/update endpoint and returns the new id.
    pub(crate) async fn post_element(&self, path: &str, element: &Element) -> Result<i64, ApiError> {
        let response = self.post_expecting(path, element, StatusCode::CREATED).await?;
        read_id(response).await
    }

    /// Reads `path`, returning the headers and the raw body.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<(HeaderMap, Vec<u8>), ApiError> {
        let response = self
            .execute(self.request(Method::GET, path), StatusCode::OK)
            .await?;
        let url = response.url().to_string();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        if body.is_empty() {
            debug!(%url, "Empty body, entity does not exist");
            return Err(ApiError::NotFound { url });
        }
        Ok((headers, body.to_vec()))
    }

    /// Reads and decodes an entity.
    pub(crate) async fn get_entity<T: FromXml>(&self, path: &str) -> Result<T, ApiError> {
        let (_, body) = self.get_raw(path).await?;
        Ok(xml::from_str(&String::from_utf8_lossy(&body))?)
    }

    /// Deletes `path`, expecting 204.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path), StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }
}

/// Reads a decimal record id from a create/update response.
pub(crate) async fn read_id(response: Response) -> Result<i64, ApiError> {
    let body = response.text().await?;
    parse_id(&body)
}

fn parse_id(body: &str) -> Result<i64, ApiError> {
    body.trim().parse().map_err(|_| ApiError::InvalidId {
        body: body.to_string(),
    })
}

/// Validates the application URL and derives the REST root.
fn rest_root(url: &str) -> Result<String> {
    Url::parse(url).with_context(|| format!("Invalid PerfRepo URL: {}", url))?;
    Ok(format!("{}/rest", url.trim_end_matches('/')))
}

fn load_certificate(path: &Path) -> Result<Certificate, ApiError> {
    let ca_error = |message: String| ApiError::CaFile {
        path: path.display().to_string(),
        message,
    };
    let pem = std::fs::read(path).map_err(|e| ca_error(e.to_string()))?;
    Certificate::from_pem(&pem).map_err(|e| ca_error(e.to_string()))
}
