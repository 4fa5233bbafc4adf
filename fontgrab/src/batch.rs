//! Chunked batch control flow.
//!
//! A whole-catalog run walks the family list in fixed-size chunks. Chunks
//! run strictly one after another; this is the sole concurrency throttle,
//! bounding outstanding requests to roughly chunk size x variants x assets
//! per family. A failed chunk is retried as a unit, and a chunk that
//! exhausts its retries records all of its families as failed without
//! aborting the run.

use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use fontgrab_core::models::{Family, FetchAllResult, FetchFontsResult};
use fontgrab_core::options::ResolvedChunk;

/// Runs `op`, retrying up to `retries` more times on failure with `delay`
/// between attempts.
///
/// A bounded loop, not recursion: total attempts are `1 + retries`, the
/// sleep happens only when another attempt follows, and `retries == 0`
/// makes the first failure permanent.
pub async fn run_with_retry<T, E, F, Fut>(retries: u32, delay: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut remaining = retries;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if remaining == 0 {
                    return Err(error);
                }
                remaining -= 1;
                warn!(error = %error, remaining, "Attempt failed, retrying");
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }
        }
    }
}

/// Walks `chunks` sequentially, running each through `run` with the
/// configured retry budget, and aggregates the outcome.
///
/// Successful chunks append their results to `success`; a chunk whose
/// retries exhaust contributes all of its families to `errors` (full
/// catalog entries, so callers can retry or report on them). The
/// inter-chunk delay is applied between chunks, not after the last one.
/// This function itself never fails; failure is data here.
pub async fn drain_chunks<'a, E, F, Fut>(
    chunks: &'a [Vec<Family>],
    options: &ResolvedChunk,
    mut run: F,
) -> FetchAllResult
where
    F: FnMut(&'a [Family]) -> Fut,
    Fut: Future<Output = Result<FetchFontsResult, E>>,
    E: fmt::Display,
{
    let mut success = FetchFontsResult::new();
    let mut errors = Vec::new();
    let retry_delay = Duration::from_millis(options.retry_delay);

    for (index, families) in chunks.iter().enumerate() {
        debug!(chunk = index, families = families.len(), "Processing chunk");

        match run_with_retry(options.retry, retry_delay, || run(families)).await {
            Ok(fonts) => success.extend(fonts),
            Err(error) => {
                warn!(chunk = index, error = %error, "Chunk failed permanently");
                errors.extend(families.iter().cloned());
            }
        }

        if options.delay > 0 && index + 1 < chunks.len() {
            sleep(Duration::from_millis(options.delay)).await;
        }
    }

    FetchAllResult { success, errors }
}

// ============================================================================
// Tests
// ============================================================================
