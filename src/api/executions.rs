//
//  perfrepo-client
//  api/executions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Test Execution Endpoints
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | create | `POST /testExecution/create` | 201, id |
//! | update | `POST /testExecution/update/{id}` | 201, id |
//! | get | `GET /testExecution/{id}` | 200 |
//! | delete | `DELETE /testExecution/{id}` | 204 |
//! | search | `POST /testExecution/search` | 200 |

use anyhow::{Context, Result};
use reqwest::StatusCode;

use super::client::PerfRepoClient;
use super::error::ApiError;
use crate::model::{TestExecution, TestExecutionSearch, TestExecutions};
use crate::xml::{self, ToXml};

impl PerfRepoClient {
    /// Creates a test execution and returns the new id.
    ///
    /// The server rejects executions holding two values of one metric that
    /// no value parameter tells apart; that surfaces as an unexpected status.
    pub async fn create_test_execution(&self, execution: &TestExecution) -> Result<i64> {
        self.post_element("/testExecution/create", &execution.to_xml())
            .await
            .context("Failed to create test execution")
    }

    /// Replaces a persisted test execution and returns its id.
    ///
    /// # Errors
    ///
    /// Fails without sending anything when `execution.id` is 0.
    pub async fn update_test_execution(&self, execution: &TestExecution) -> Result<i64> {
        if execution.id == 0 {
            return Err(ApiError::MissingId {
                entity: "test execution",
            })
            .context("Failed to update test execution");
        }
        self.post_element(
            &format!("/testExecution/update/{}", execution.id),
            &execution.to_xml(),
        )
        .await
        .with_context(|| format!("Failed to update test execution {}", execution.id))
    }

    /// Reads a test execution by id.
    pub async fn get_test_execution(&self, id: i64) -> Result<TestExecution> {
        self.get_entity(&format!("/testExecution/{}", id))
            .await
            .with_context(|| format!("Failed to get test execution {}", id))
    }

    /// Deletes a test execution.
    pub async fn delete_test_execution(&self, id: i64) -> Result<()> {
        self.delete(&format!("/testExecution/{}", id))
            .await
            .with_context(|| format!("Failed to delete test execution {}", id))
    }

    /// Returns the executions matching `criteria`, in server order.
    ///
    /// An empty response body yields no executions.
    pub async fn search_test_executions(
        &self,
        criteria: &TestExecutionSearch,
    ) -> Result<Vec<TestExecution>> {
        self.search(criteria)
            .await
            .context("Error while searching test executions")
    }

    async fn search(&self, criteria: &TestExecutionSearch) -> Result<Vec<TestExecution>, ApiError> {
        let response = self
            .post_expecting("/testExecution/search", &criteria.to_xml(), StatusCode::OK)
            .await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let results: TestExecutions = xml::from_str(&body)?;
        Ok(results.executions)
    }
}
