//! Credential and identity types for the client session
//!
//! SECURITY: Secret-bearing types implement Drop to clear sensitive data and
//! never reveal their contents through Debug.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fmt;

/// Secret string that zeros memory on drop
///
/// SECURITY: This type never implements Display or Debug in a way that reveals the secret.
pub struct SecureString(String);

impl Clone for SecureString {
    fn clone(&self) -> Self {
        SecureString(self.0.clone())
    }
}

impl SecureString {
    /// Create a new secure string
    pub fn new(secret: impl Into<String>) -> Self {
        SecureString(secret.into())
    }

    /// Get the secret as a string slice
    ///
    /// Use this sparingly and only when building the authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the secret
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the secret is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for SecureString {
    fn drop(&mut self) {
        // Zero the memory
        // SAFETY: We own this String and are zeroing it before drop
        unsafe {
            let bytes = self.0.as_bytes_mut();
            for byte in bytes {
                std::ptr::write_volatile(byte, 0);
            }
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SECURITY: Never reveal the secret content
        write!(f, "SecureString(*** {} bytes ***)", self.0.len())
    }
}

/// The session credential attached to outbound requests
///
/// A deployment uses exactly one of the two schemes; the stored variant decides
/// what `authorization_header` emits. At most one credential exists per session
/// and its presence is the sole definition of "authenticated".
#[derive(Debug, Clone)]
pub enum Credential {
    /// Opaque bearer token from the token-issuing login endpoint
    Bearer(SecureString),
    /// Complete `Basic` header value built from username and password at login
    Basic(SecureString),
}

impl Credential {
    /// Create a bearer-token credential
    pub fn bearer(token: impl Into<String>) -> Self {
        Credential::Bearer(SecureString::new(token))
    }

    /// Create a basic-auth credential from the raw username and password
    ///
    /// The base64 header value is built once here so the password itself is not
    /// kept around for the lifetime of the session.
    pub fn basic(username: &str, password: &str) -> Self {
        let encoded = BASE64.encode(format!("{}:{}", username, password));
        Credential::Basic(SecureString::new(encoded))
    }

    /// The full `Authorization` header value for this credential
    pub fn authorization_header(&self) -> String {
        match self {
            Credential::Bearer(token) => format!("Bearer {}", token.as_str()),
            Credential::Basic(encoded) => format!("Basic {}", encoded.as_str()),
        }
    }
}

/// Identity fields derived from the login response
///
/// Stored alongside the credential and cleared atomically with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub user_id: Option<i64>,
    /// True when the account still uses the initially provisioned password
    pub default_password: bool,
}

impl Identity {
    pub fn new(username: impl Into<String>, user_id: Option<i64>, default_password: bool) -> Self {
        Identity {
            username: username.into(),
            user_id,
            default_password,
        }
    }
}
