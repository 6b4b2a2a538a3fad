//
//  perfrepo-client
//  api/attachments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Attachment upload and download.
//!
//! Attachments travel as raw bodies. The upload names the content type in
//! `Content-Type` and the stored file name in a `filename` header; the
//! download returns them as `Content-Type` and
//! `Content-Disposition: attachment; filename=...`.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};

use super::client::{read_id, PerfRepoClient};
use super::error::ApiError;
use crate::model::Attachment;

/// Header carrying the target file name on upload.
pub const FILENAME_HEADER: &str = "filename";

static FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[^;]*;\s*filename="?([^";]*)"?\s*$"#).unwrap());

impl PerfRepoClient {
    /// Uploads `attachment` to a test execution and returns the attachment id.
    ///
    /// `POST /testExecution/{id}/addAttachment`, 201.
    pub async fn create_attachment(
        &self,
        test_execution_id: i64,
        attachment: &Attachment,
    ) -> Result<i64> {
        self.upload(test_execution_id, attachment)
            .await
            .with_context(|| {
                format!(
                    "Failed to add attachment to test execution {}",
                    test_execution_id
                )
            })
    }

    /// Downloads an attachment (`GET /testExecution/attachment/{id}`).
    pub async fn get_attachment(&self, id: i64) -> Result<Attachment> {
        let (headers, content) = self
            .get_raw(&format!("/testExecution/attachment/{}", id))
            .await
            .with_context(|| format!("Error while getting attachment {}", id))?;
        Ok(Attachment {
            content,
            content_type: header_str(&headers, CONTENT_TYPE.as_str()),
            target_file_name: parse_file_name(&header_str(&headers, CONTENT_DISPOSITION.as_str())),
        })
    }

    async fn upload(&self, test_execution_id: i64, attachment: &Attachment) -> Result<i64, ApiError> {
        let request = self
            .request(
                Method::POST,
                &format!("/testExecution/{}/addAttachment", test_execution_id),
            )
            .header(CONTENT_TYPE, attachment.content_type.as_str())
            .header(FILENAME_HEADER, attachment.target_file_name.as_str())
            .body(attachment.content.clone());
        let response = self.execute(request, StatusCode::CREATED).await?;
        read_id(response).await
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Extracts the file name from a `Content-Disposition` value.
///
/// Returns an empty string when the value is not of the form
/// `<type>; filename=<name>`.
pub fn parse_file_name(header_value: &str) -> String {
    FILENAME_RE
        .captures(header_value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
