//! Delay command - wait and report elapsed time

use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use devoverflow_core::delay;

use crate::output;

#[derive(Serialize)]
struct DelayReport {
    requested_ms: u64,
    elapsed_ms: u64,
}

pub fn run(ms: u64, json: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    let start = Instant::now();
    runtime.block_on(delay(ms));
    let report = DelayReport {
        requested_ms: ms,
        elapsed_ms: start.elapsed().as_millis() as u64,
    };

    if json {
        return output::json(report);
    }

    output::success(&format!(
        "Waited {} ms (requested {} ms)",
        report.elapsed_ms, report.requested_ms
    ));
    Ok(())
}
