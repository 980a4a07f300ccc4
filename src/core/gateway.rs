//! The single outbound call path
//!
//! Every request the client makes goes through [`Gateway::send`]: it attaches
//! the session credential, classifies failures into the [`ApiError`] taxonomy,
//! emits exactly one user-facing notification per failure, and drives the
//! session recovery protocol on authorization failures. Nothing above this
//! module ever sees a raw status code.

use crate::core::notify::Notifier;
use crate::core::recovery::{Navigator, RecoveryGuard, RecoveryOutcome};
use crate::core::session::SessionStore;
use crate::core::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::utils::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// An outbound request as the API services describe it
///
/// Paths are resolved against the gateway's base URL; absolute URLs (HAL self
/// links) pass through untouched. The login call opts out of credential
/// attachment with [`skip_auth`].
///
/// [`skip_auth`]: ApiRequest::skip_auth
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Value>,
    skip_auth: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
            skip_auth: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        let mut request = Self::new(Method::Post, path);
        request.body = Some(body);
        request
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        let mut request = Self::new(Method::Put, path);
        request.body = Some(body);
        request
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        let mut request = Self::new(Method::Patch, path);
        request.body = Some(body);
        request
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Do not attach the session credential to this request
    pub fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }

    /// Add an explicit header (e.g. the basic login's own Authorization)
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// The HTTP gateway all application code must use
pub struct Gateway {
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionStore>,
    recovery: RecoveryGuard,
    notifier: Arc<dyn Notifier>,
    base_url: String,
}

impl Gateway {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Gateway {
            transport,
            recovery: RecoveryGuard::new(navigator, notifier.clone()),
            session,
            notifier,
            base_url: base_url.into(),
        }
    }

    /// The shared session store backing this gateway
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// True while a session recovery run is in flight
    pub fn is_recovering(&self) -> bool {
        self.recovery.is_recovering()
    }

    /// Send a request, classify the outcome
    ///
    /// On a 401 the request is never retried: the recovery protocol runs (at
    /// most once system-wide at a time) and the call rejects with
    /// [`ApiError::AuthExpired`] or [`ApiError::AuthRejected`]. Other error
    /// classes emit their mapped notification and reject.
    pub async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError> {
        let url = self.resolve_url(&request.path);
        let mut headers = request.headers;

        if request.body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        // Absence of a credential only omits the header.
        if !request.skip_auth {
            if let Some(credential) = self.session.current() {
                headers.push(("Authorization".to_string(), credential.authorization_header()));
            }
        }

        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let response = match self
            .transport
            .execute(HttpRequest {
                method: request.method,
                url,
                headers,
                body: request.body,
            })
            .await
        {
            Ok(response) => response,
            Err(transport_err) => {
                let err = ApiError::from(transport_err);
                self.notify_failure(&err);
                return Err(err);
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        let err = self.classify(response).await;
        self.notify_failure(&err);
        Err(err)
    }

    /// GET a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::get(path)).await?;
        decode(&response)
    }

    /// POST a JSON body, parse the JSON response
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::post(path, encode(body)?)).await?;
        decode(&response)
    }

    /// PUT a JSON body, parse the JSON response
    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::put(path, encode(body)?)).await?;
        decode(&response)
    }

    /// PATCH a JSON body, parse the JSON response
    pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::patch(path, encode(body)?)).await?;
        decode(&response)
    }

    /// DELETE a resource, ignoring any response body
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::delete(path)).await?;
        Ok(())
    }

    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        }
    }

    async fn classify(&self, response: HttpResponse) -> ApiError {
        match response.status {
            401 => match self.recovery.handle_unauthorized(&self.session).await {
                RecoveryOutcome::NotAuthenticated => ApiError::AuthRejected,
                RecoveryOutcome::Recovered | RecoveryOutcome::AlreadyRecovering => {
                    ApiError::AuthExpired
                }
            },
            400 => ApiError::Validation(
                response
                    .body_message()
                    .unwrap_or_else(|| "The request was invalid.".to_string()),
            ),
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            500 => ApiError::ServerFault,
            status => ApiError::Unclassified {
                status,
                message: response.body_message(),
            },
        }
    }

    fn notify_failure(&self, err: &ApiError) {
        if let Some((title, message)) = err.notification() {
            self.notifier.error(title, &message);
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    response.json().map_err(|e| ApiError::Decode(e.to_string()))
}
