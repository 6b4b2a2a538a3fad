//
//  perfrepo-client
//  cli/smoke.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Smoke check against a live server
//!
//! ```bash
//! perfrepo --url http://localhost:8080/testing-repo smoke
//! perfrepo smoke --name nightly
//! ```

use anyhow::{bail, Result};
use clap::Args;
use tracing::{info, warn};

use crate::api::PerfRepoClient;
use crate::fixtures::Fixtures;
use crate::model::Test;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct SmokeCommand {
    /// Name prefix of the throwaway test
    #[arg(long, default_value = "smoke")]
    pub name: String,
}

impl SmokeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let test = Fixtures::thread_local().test(&self.name);

        let id = client.create_test(&test).await?;
        info!(id, uid = %test.uid, "Created test");

        if let Err(err) = verify(&client, id, &test).await {
            if let Err(cleanup) = client.delete_test(id).await {
                warn!(id, error = %cleanup, "Failed to remove smoke test");
            }
            return Err(err);
        }

        client.delete_test(id).await?;
        println!("Smoke check passed: created, read and deleted test {}", id);
        Ok(())
    }
}

async fn verify(client: &PerfRepoClient, id: i64, expected: &Test) -> Result<()> {
    let stored = client.get_test(id).await?;
    if stored.uid != expected.uid || stored.metrics.len() != expected.metrics.len() {
        bail!(
            "Test {} read back differently: uid {:?}, {} metrics",
            id,
            stored.uid,
            stored.metrics.len()
        );
    }
    Ok(())
}
