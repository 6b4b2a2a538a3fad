//
//  perfrepo-client
//  api/test_definitions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test and metric endpoints.

use anyhow::{Context, Result};

use super::client::PerfRepoClient;
use crate::model::{Metric, Test};
use crate::xml::ToXml;

impl PerfRepoClient {
    /// Creates a test with its metrics and returns the new id.
    ///
    /// `POST /test/create`, 201.
    pub async fn create_test(&self, test: &Test) -> Result<i64> {
        self.post_element("/test/create", &test.to_xml())
            .await
            .context("Failed to create test")
    }

    /// Reads a test by id.
    ///
    /// `GET /test/id/{id}`, 200. An empty body is reported as not found.
    pub async fn get_test(&self, id: i64) -> Result<Test> {
        self.get_entity(&format!("/test/id/{}", id))
            .await
            .with_context(|| format!("Failed to get test {}", id))
    }

    /// Reads a test by its UID.
    ///
    /// The UID is placed into the path as given.
    pub async fn get_test_by_uid(&self, uid: &str) -> Result<Test> {
        self.get_entity(&format!("/test/uid/{}", uid))
            .await
            .with_context(|| format!("Failed to get test with uid {}", uid))
    }

    /// Deletes a test (`DELETE /test/id/{id}`, 204).
    pub async fn delete_test(&self, id: i64) -> Result<()> {
        self.delete(&format!("/test/id/{}", id))
            .await
            .with_context(|| format!("Failed to delete test {}", id))
    }

    /// Adds a metric to an existing test and returns the metric id.
    pub async fn add_metric(&self, test_id: i64, metric: &Metric) -> Result<i64> {
        self.post_element(&format!("/test/id/{}/addMetric", test_id), &metric.to_xml())
            .await
            .with_context(|| format!("Failed to add metric to test {}", test_id))
    }

    /// Reads a metric by id (`GET /metric/{id}`).
    pub async fn get_metric(&self, id: i64) -> Result<Metric> {
        self.get_entity(&format!("/metric/{}", id))
            .await
            .with_context(|| format!("Failed to get metric {}", id))
    }
}
