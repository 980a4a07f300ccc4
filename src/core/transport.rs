//! Outbound HTTP abstraction
//!
//! This trait allows testing the gateway, recovery, and polling protocols
//! without a real backend by supporting mock implementations. The concrete
//! reqwest-backed implementation is in `src/transport/`.

use crate::utils::TransportError;
use serde_json::Value;

/// HTTP method for an outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully resolved outbound request, ready for the transport
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Raw response handed back by the transport
///
/// The transport reports every received response, whatever the status; turning
/// statuses into errors is the gateway's job.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Best-effort extraction of a `message` (or `error`) field from an error body
    pub fn body_message(&self) -> Option<String> {
        let value: Value = serde_json::from_slice(&self.body).ok()?;
        value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Transport trait for abstraction over real/mock HTTP implementations
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a single request
    ///
    /// Returns `Err` only when no response was received (connection failure,
    /// timeout); an HTTP error status is still an `Ok` response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_message_extraction() {
        let resp = HttpResponse {
            status: 400,
            body: br#"{"message":"url must not be blank"}"#.to_vec(),
        };
        assert_eq!(resp.body_message().as_deref(), Some("url must not be blank"));

        let resp = HttpResponse {
            status: 400,
            body: br#"{"error":"validation failed"}"#.to_vec(),
        };
        assert_eq!(resp.body_message().as_deref(), Some("validation failed"));

        let resp = HttpResponse {
            status: 400,
            body: b"<html>nope</html>".to_vec(),
        };
        assert_eq!(resp.body_message(), None);
    }

    #[test]
    fn test_success_range() {
        assert!(HttpResponse { status: 204, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 302, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 500, body: vec![] }.is_success());
    }
}
