//
//  perfrepo-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! PerfRepo accepts HTTP Basic authentication only. The header value is
//! computed once when the client is built and attached to every request.
//!
//! ## Example
//!
//! ```rust
//! use perfrepo_client::auth::BasicAuth;
//!
//! let auth = BasicAuth::new("perfrepouser", "perfrepouser1");
//! assert_eq!(auth.username(), "perfrepouser");
//! assert_eq!(auth.header_value(), "Basic cGVyZnJlcG91c2VyOnBlcmZyZXBvdXNlcjE=");
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// Basic credentials for the PerfRepo server.
///
/// # Notes
///
/// - The password is never printed; `Debug` output redacts it.
/// - Empty user names and passwords are encoded as given.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    header: String,
}

impl BasicAuth {
    /// Encodes `username:password` as a Basic `Authorization` value.
    pub fn new(username: impl Into<String>, password: impl AsRef<str>) -> Self {
        let username = username.into();
        let token = STANDARD.encode(format!("{}:{}", username, password.as_ref()));
        Self {
            header: format!("Basic {}", token),
            username,
        }
    }

    /// The user the credentials belong to.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The full `Authorization` header value.
    pub fn header_value(&self) -> &str {
        &self.header
    }

    /// Adds the `Authorization` header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, self.header.as_str())
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("header", &"Basic ***")
            .finish()
    }
}
