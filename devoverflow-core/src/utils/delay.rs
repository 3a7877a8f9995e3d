//! Async pause helpers
//!
//! `delay` cannot be aborted once awaited; drop the future or use
//! [`delay_or_cancel`] when the caller needs to stop early.

use std::future::Future;
use std::time::Duration;

/// Completes after at least `ms` milliseconds
///
/// A zero delay yields once to the runtime and completes on the next poll.
/// Must run inside a tokio runtime with the time driver enabled.
pub async fn delay(ms: u64) {
    if ms == 0 {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Waits for `ms` milliseconds unless `cancel` completes first
///
/// Returns `true` when the full delay elapsed and `false` when it was cut
/// short. If both are ready on the same poll the elapsed delay wins.
pub async fn delay_or_cancel<F>(ms: u64, cancel: F) -> bool
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = delay(ms) => true,
        _ = cancel => false,
    }
}
