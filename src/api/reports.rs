//
//  perfrepo-client
//  api/reports.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Report and report permission endpoints.
//!
//! Unlike the other create/delete calls, the permission endpoints answer
//! 200 and return no id.

use anyhow::{Context, Result};
use reqwest::StatusCode;

use super::client::PerfRepoClient;
use super::error::ApiError;
use crate::model::{Permission, Report};
use crate::xml::ToXml;

impl PerfRepoClient {
    /// Creates a report and returns the new id.
    pub async fn create_report(&self, report: &Report) -> Result<i64> {
        self.post_element("/report/create", &report.to_xml())
            .await
            .context("Failed to create report")
    }

    /// Replaces a persisted report and returns its id.
    ///
    /// # Errors
    ///
    /// Fails without sending anything when `report.id` is 0.
    pub async fn update_report(&self, report: &Report) -> Result<i64> {
        if report.id == 0 {
            return Err(ApiError::MissingId { entity: "report" })
                .context("Failed to update report");
        }
        self.post_element(&format!("/report/update/{}", report.id), &report.to_xml())
            .await
            .with_context(|| format!("Failed to update report {}", report.id))
    }

    /// Reads a report by id.
    pub async fn get_report(&self, id: i64) -> Result<Report> {
        self.get_entity(&format!("/report/id/{}", id))
            .await
            .with_context(|| format!("Failed to get report {}", id))
    }

    /// Deletes a report.
    pub async fn delete_report(&self, id: i64) -> Result<()> {
        self.delete(&format!("/report/id/{}", id))
            .await
            .with_context(|| format!("Failed to delete report {}", id))
    }

    /// Grants `permission` on report `permission.report_id`.
    pub async fn add_report_permission(&self, permission: &Permission) -> Result<()> {
        self.post_permission(permission, "addPermission")
            .await
            .context("Error while adding permission to report")
    }

    /// Revokes `permission` from report `permission.report_id`.
    pub async fn delete_report_permission(&self, permission: &Permission) -> Result<()> {
        self.post_permission(permission, "deletePermission")
            .await
            .context("Error while deleting permission")
    }

    async fn post_permission(&self, permission: &Permission, action: &str) -> Result<(), ApiError> {
        self.post_expecting(
            &format!("/report/id/{}/{}", permission.report_id, action),
            &permission.to_standalone_xml(),
            StatusCode::OK,
        )
        .await?;
        Ok(())
    }
}
