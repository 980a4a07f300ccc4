//! Polling loop for long-running server-side jobs
//!
//! A job resource exposes a `status` field and a self link. The loop sleeps a
//! fixed interval while the status is non-terminal, then re-fetches the
//! resource at its self link, replacing the local snapshot. There is no
//! attempt cap or overall deadline: termination comes from the resource
//! itself, and a failed fetch aborts the loop without retrying. Callers who
//! need a bound can wrap the returned future in `tokio::time::timeout`.

use crate::core::gateway::Gateway;
use crate::models::Report;
use crate::utils::ApiError;
use std::time::Duration;
use tokio::time::sleep;

/// Re-fetch a report at its self link until its status turns terminal
///
/// The interval is injectable so tests can run the loop at millisecond scale;
/// production callers pass [`REPORT_POLL_INTERVAL`].
///
/// [`REPORT_POLL_INTERVAL`]: crate::constants::REPORT_POLL_INTERVAL
pub async fn poll_until_terminal(
    gateway: &Gateway,
    initial: Report,
    interval: Duration,
) -> Result<Report, ApiError> {
    let mut report = initial;

    while !report.status.is_terminal() {
        let href = report
            .self_href()
            .ok_or_else(|| ApiError::Decode("report exposes no self link to poll".to_string()))?
            .to_string();

        sleep(interval).await;
        tracing::debug!(%href, "polling report status");
        report = gateway.get_json(&href).await?;
    }

    Ok(report)
}
