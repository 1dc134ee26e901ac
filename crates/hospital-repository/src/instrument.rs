//! Query instrumentation.
//!
//! Start/outcome logging and wall-clock timing is a cross-cutting
//! concern: every DAO operation runs through [`timed`] instead of
//! carrying its own clocks.

use hospital_core::HospitalResult;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, warn};

/// Runs one DAO operation, logging its start, its outcome, and the
/// elapsed wall-clock time in milliseconds with sub-millisecond
/// precision.
pub async fn timed<T, F>(operation: &'static str, fut: F) -> HospitalResult<T>
where
    F: Future<Output = HospitalResult<T>>,
{
    debug!(operation, "operation started");
    let started = Instant::now();

    let result = fut.await;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
    match &result {
        Ok(_) => debug!(operation, elapsed_ms, "operation completed"),
        Err(e) => warn!(operation, elapsed_ms, error = %e, "operation failed"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_core::HospitalError;

    #[tokio::test]
    async fn test_timed_passes_through_success() {
        let value = timed("test.ok", async { Ok(42) }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_timed_passes_through_failure() {
        let result: HospitalResult<()> = timed("test.err", async {
            Err(HospitalError::persistence("boom"))
        })
        .await;
        assert!(matches!(result, Err(HospitalError::Persistence(_))));
    }
}
