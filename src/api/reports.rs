//! Report listing and generation
//!
//! Generation is a long-running backend job: the POST returns a report in
//! `GENERATING` state and the service polls its self link at a fixed interval
//! until the status turns terminal, then refreshes the cached collection. An
//! atomic in-flight flag suppresses concurrent generation runs.

use crate::constants::REPORT_POLL_INTERVAL;
use crate::core::gateway::{ApiRequest, Gateway};
use crate::core::polling::poll_until_terminal;
use crate::models::{unwrap_embedded, Report};
use crate::utils::ApiError;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Outcome of a generation request
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// The job ran to completion; this is the final report
    Completed(Report),
    /// A generation run was already in flight; no request was issued
    AlreadyRunning,
}

/// Report service over the gateway
pub struct ReportService {
    gateway: Arc<Gateway>,
    reports: Mutex<Vec<Report>>,
    generating: AtomicBool,
    poll_interval: Duration,
}

impl ReportService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self::with_poll_interval(gateway, REPORT_POLL_INTERVAL)
    }

    /// Construct with an explicit poll interval (tests shrink it)
    pub fn with_poll_interval(gateway: Arc<Gateway>, poll_interval: Duration) -> Self {
        ReportService {
            gateway,
            reports: Mutex::new(Vec::new()),
            generating: AtomicBool::new(false),
            poll_interval,
        }
    }

    /// True while a generation job is being driven to completion
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    /// The last fetched report collection
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().expect("report cache lock poisoned").clone()
    }

    /// Fetch the report collection and cache it
    pub async fn fetch_reports(&self) -> Result<Vec<Report>, ApiError> {
        let payload: Value = self.gateway.get_json("/reports").await?;
        let reports: Vec<Report> = unwrap_embedded(payload, "reports")?;
        *self.reports.lock().expect("report cache lock poisoned") = reports.clone();
        Ok(reports)
    }

    /// Fetch a single report by id
    pub async fn fetch_report(&self, id: &str) -> Result<Report, ApiError> {
        self.gateway.get_json(&format!("/reports/{}", id)).await
    }

    /// Kick off report generation and drive it to completion
    ///
    /// Suppressed while another run is in flight. On completion (or failure)
    /// the in-flight flag is cleared; on completion the cached collection is
    /// refreshed so the final report appears in listings.
    pub async fn generate(&self) -> Result<GenerateOutcome, ApiError> {
        if self.generating.swap(true, Ordering::SeqCst) {
            return Ok(GenerateOutcome::AlreadyRunning);
        }

        let result = self.run_generation().await;
        self.generating.store(false, Ordering::SeqCst);

        match result {
            Ok(report) => {
                tracing::info!(status = ?report.status, "report generation finished");
                Ok(GenerateOutcome::Completed(report))
            }
            Err(err) => {
                tracing::warn!(error = %err, "report generation failed");
                Err(err)
            }
        }
    }

    async fn run_generation(&self) -> Result<Report, ApiError> {
        let response = self
            .gateway
            .send(ApiRequest::post("/reports", json!({})))
            .await?;
        let initial: Report = response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let report = poll_until_terminal(&self.gateway, initial, self.poll_interval).await?;
        self.fetch_reports().await?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mocks::{MockNavigator, MockTransport, RecordingNotifier};
    use crate::core::session::SessionStore;
    use crate::models::ReportStatus;
    use serde_json::json;

    fn service(transport: Arc<MockTransport>) -> ReportService {
        let gateway = Gateway::new(
            "http://agent.local/api",
            transport,
            Arc::new(SessionStore::new()),
            Arc::new(MockNavigator::at("/reports")),
            Arc::new(RecordingNotifier::new()),
        );
        ReportService::with_poll_interval(Arc::new(gateway), Duration::from_millis(1))
    }

    fn report_json(status: &str) -> serde_json::Value {
        json!({
            "id": 7,
            "status": status,
            "results": [],
            "_links": { "self": { "href": "http://agent.local/api/reports/7" } }
        })
    }

    #[tokio::test]
    async fn test_generate_polls_until_terminal_then_refreshes() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(201, report_json("GENERATING")); // POST /reports
        transport.push_json(200, report_json("GENERATING")); // poll 1
        transport.push_json(200, report_json("GENERATING")); // poll 2
        transport.push_json(200, report_json("GENERATED")); // poll 3, terminal
        transport.push_json(200, json!({ "_embedded": { "reports": [report_json("GENERATED")] } }));
        let service = service(transport.clone());

        let outcome = service.generate().await.unwrap();

        let report = match outcome {
            GenerateOutcome::Completed(report) => report,
            other => panic!("expected completion, got {:?}", other),
        };
        assert_eq!(report.status, ReportStatus::Generated);
        assert!(!service.is_generating());
        assert_eq!(service.reports().len(), 1);

        // One creation POST, three status fetches at the self link, one
        // collection refresh.
        let requests = transport.requests();
        assert_eq!(requests.len(), 5);
        assert_eq!(requests[0].url, "http://agent.local/api/reports");
        for poll in &requests[1..4] {
            assert_eq!(poll.url, "http://agent.local/api/reports/7");
        }
        assert_eq!(requests[4].url, "http://agent.local/api/reports");
    }

    #[tokio::test]
    async fn test_generate_completes_immediately_when_terminal() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(201, report_json("GENERATED"));
        transport.push_json(200, json!({ "_embedded": { "reports": [] } }));
        let service = service(transport.clone());

        service.generate().await.unwrap();

        // No status fetches at all
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_generate_is_suppressed() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(201, report_json("GENERATING"));
        transport.push_json(200, report_json("GENERATED"));
        transport.push_json(200, json!({ "_embedded": { "reports": [] } }));
        let service = Arc::new(service(transport.clone()));

        let background = {
            let service = service.clone();
            tokio::spawn(async move { service.generate().await })
        };
        tokio::task::yield_now().await;

        // Second call while the first is polling: no request issued
        let issued_before = transport.request_count();
        let outcome = service.generate().await.unwrap();
        assert_eq!(outcome, GenerateOutcome::AlreadyRunning);
        assert_eq!(transport.request_count(), issued_before);

        let first = background.await.unwrap().unwrap();
        assert!(matches!(first, GenerateOutcome::Completed(_)));
        assert!(!service.is_generating());
    }

    #[tokio::test]
    async fn test_failed_generation_clears_flag() {
        let transport = Arc::new(MockTransport::new());
        transport.push_status(500);
        let service = service(transport.clone());

        let err = service.generate().await.unwrap_err();

        assert_eq!(err, ApiError::ServerFault);
        assert!(!service.is_generating());
        assert_eq!(transport.request_count(), 1);

        // The flag really is clear: a fresh run issues requests again
        transport.push_json(201, report_json("GENERATED"));
        transport.push_json(200, json!({ "_embedded": { "reports": [] } }));
        service.generate().await.unwrap();
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_fetch_reports_caches_collection() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            json!({ "_embedded": { "reports": [report_json("GENERATED")] } }),
        );
        let service = service(transport);

        let fetched = service.fetch_reports().await.unwrap();

        assert_eq!(fetched.len(), 1);
        assert_eq!(service.reports(), fetched);
    }
}
