//! Mock transport, navigator, and notifier for testing without a backend
//!
//! Provides canned responses that simulate the monitoring backend, plus
//! recording implementations of the injected UI capabilities. Used to test the
//! gateway, recovery, and polling protocols without a server.

use crate::core::notify::Notifier;
use crate::core::recovery::Navigator;
use crate::core::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::utils::TransportError;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Mock transport replaying a queue of canned outcomes
///
/// Records every request so tests can assert on methods, URLs, and headers.
/// An exhausted queue fails the request, which keeps a test that issues more
/// calls than it scripted from passing silently.
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    unreachable: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            unreachable: false,
        }
    }

    /// Transport where every request fails with a connection error
    pub fn unreachable() -> Self {
        MockTransport {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            unreachable: true,
        }
    }

    /// Queue a JSON response with the given status
    pub fn push_json(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse {
                status,
                body: serde_json::to_vec(&body).unwrap(),
            }));
    }

    /// Queue an empty-bodied response with the given status
    pub fn push_status(&self, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse {
                status,
                body: Vec::new(),
            }));
    }

    /// Queue a transport-level failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// All requests seen so far, in order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        if self.unreachable {
            return Err(TransportError::Connection("connection refused".to_string()));
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "mock transport: no canned response left".to_string(),
                ))
            })
    }
}

/// Recording navigator with optional delay and failure injection
pub struct MockNavigator {
    location: Mutex<String>,
    navigations: Mutex<Vec<String>>,
    delay: Option<Duration>,
    fail: bool,
}

impl MockNavigator {
    /// Navigator currently at the given location
    pub fn at(location: &str) -> Self {
        MockNavigator {
            location: Mutex::new(location.to_string()),
            navigations: Mutex::new(Vec::new()),
            delay: None,
            fail: false,
        }
    }

    /// Navigator whose navigations take a while to complete
    pub fn slow(location: &str, delay: Duration) -> Self {
        MockNavigator {
            delay: Some(delay),
            ..Self::at(location)
        }
    }

    /// Navigator whose navigations always fail
    pub fn failing(location: &str) -> Self {
        MockNavigator {
            fail: true,
            ..Self::at(location)
        }
    }

    /// All navigation targets seen so far, in order
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Navigator for MockNavigator {
    fn current_location(&self) -> String {
        self.location.lock().unwrap().clone()
    }

    async fn navigate_to(&self, location: &str) -> Result<(), String> {
        self.navigations.lock().unwrap().push(location.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err("router rejected navigation".to_string());
        }
        *self.location.lock().unwrap() = location.to_string();
        Ok(())
    }
}

/// Notifier that records every emitted notification
#[derive(Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<(&'static str, String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, level: &'static str, title: &str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, title.to_string(), message.to_string()));
    }

    /// Titles of warning notifications, in order
    pub fn warnings(&self) -> Vec<String> {
        self.titles("warning")
    }

    /// Titles of error notifications, in order
    pub fn errors(&self) -> Vec<String> {
        self.titles("error")
    }

    /// Every (level, title, message) triple seen so far
    pub fn all(&self) -> Vec<(&'static str, String, String)> {
        self.entries.lock().unwrap().clone()
    }

    fn titles(&self, level: &str) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _, _)| *l == level)
            .map(|(_, title, _)| title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, title: &str, message: &str) {
        self.record("success", title, message);
    }

    fn info(&self, title: &str, message: &str) {
        self.record("info", title, message);
    }

    fn warning(&self, title: &str, message: &str) {
        self.record("warning", title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.record("error", title, message);
    }
}
