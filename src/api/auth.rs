//! Login and logout for both deployment modes
//!
//! Token deployments POST credentials and receive a bearer token; basic-auth
//! deployments GET the login endpoint with a Basic header that then becomes
//! the session credential. A deployment uses exactly one of the two. The login
//! call itself opts out of credential attachment so a stale session can never
//! leak into it.

use crate::core::gateway::{ApiRequest, Gateway};
use crate::models::{Credential, Identity};
use crate::utils::ApiError;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub identity: Identity,
    /// Location remembered by a previous session expiry, consumed here
    pub redirect_to: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenLoginUser {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    default_password: bool,
}

#[derive(Debug, Deserialize)]
struct TokenLoginResponse {
    token: String,
    #[serde(default)]
    user: Option<TokenLoginUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BasicLoginResponse {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default)]
    default_password: bool,
}

/// Authentication service over the gateway
pub struct AuthService {
    gateway: Arc<Gateway>,
}

impl AuthService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        AuthService { gateway }
    }

    /// Log in against a bearer-token deployment
    ///
    /// On success the credential and identity are stored atomically and any
    /// location remembered by a prior session expiry is consumed. A rejected
    /// login stores nothing.
    pub async fn login_bearer(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let request = ApiRequest::post(
            "/auth/login",
            json!({ "username": username, "password": password }),
        )
        .skip_auth();

        let response = self.gateway.send(request).await.map_err(as_rejection)?;
        let parsed: TokenLoginResponse = response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if parsed.token.is_empty() {
            return Err(ApiError::Decode(
                "no token received from server".to_string(),
            ));
        }

        let user = parsed.user.unwrap_or(TokenLoginUser {
            username: None,
            id: None,
            default_password: false,
        });
        let identity = Identity::new(
            effective_username(user.username, username),
            user.id,
            user.default_password,
        );

        Ok(self.finish_login(Credential::bearer(parsed.token), identity))
    }

    /// Log in against a basic-auth deployment
    ///
    /// The Basic header built from the submitted credentials authenticates the
    /// login call itself and, once accepted, becomes the session credential.
    pub async fn login_basic(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let credential = Credential::basic(username, password);
        let request = ApiRequest::get("/login")
            .skip_auth()
            .header("Authorization", credential.authorization_header())
            .header("Accept", "application/json");

        let response = self.gateway.send(request).await.map_err(as_rejection)?;
        let parsed: BasicLoginResponse = response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let identity = Identity::new(
            effective_username(parsed.username, username),
            parsed.user_id,
            parsed.default_password,
        );

        Ok(self.finish_login(credential, identity))
    }

    /// Drop the session credential and identity
    pub fn logout(&self) {
        self.gateway.session().clear();
    }

    fn finish_login(&self, credential: Credential, identity: Identity) -> LoginOutcome {
        let session = self.gateway.session();
        session.set_credential(credential, identity.clone());
        LoginOutcome {
            identity,
            redirect_to: session.take_redirect_path(),
        }
    }
}

/// A 401 on the login call is a rejected login, never an expired session
fn as_rejection(err: ApiError) -> ApiError {
    match err {
        ApiError::AuthExpired | ApiError::AuthRejected => ApiError::AuthRejected,
        other => other,
    }
}

/// Prefer the server's username, falling back to what the user submitted
fn effective_username(server: Option<String>, submitted: &str) -> String {
    match server {
        Some(name) if !name.trim().is_empty() => name,
        _ => submitted.to_string(),
    }
}
