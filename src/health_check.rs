//! Backend health probe.
//!
//! Used by `--health` and, in the background, at TUI startup so the header
//! can show whether the backend is reachable before anything is submitted.

use std::time::Instant;

use crate::client::AssessClient;
use crate::traits::HttpClient;

/// Result of a health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckResult {
    pub healthy: bool,
    /// Round trip of the probe, when it answered at all
    pub response_time_ms: Option<u64>,
    /// Why the probe failed, if it did
    pub error_message: Option<String>,
}

/// Probe `GET /admin/evaluation/test`.
///
/// Never fails; transport problems are reported in the result.
pub async fn run_health_check<C: HttpClient>(client: &AssessClient<C>) -> HealthCheckResult {
    let start = Instant::now();
    match client.health_check().await {
        Ok(healthy) => HealthCheckResult {
            healthy,
            response_time_ms: Some(start.elapsed().as_millis() as u64),
            error_message: (!healthy).then(|| "Backend answered with an error status".to_string()),
        },
        Err(err) => {
            tracing::debug!("health check failed: {}", err);
            HealthCheckResult {
                healthy: false,
                response_time_ms: None,
                error_message: Some(err.to_string()),
            }
        }
    }
}
