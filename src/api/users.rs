//! Password change for the logged-in user
//!
//! Validation runs client-side first so obviously bad input never reaches the
//! backend; the backend's own rejections are mapped into this module's error
//! type rather than surfacing raw API errors to the password form.

use crate::core::gateway::{ApiRequest, Gateway};
use crate::core::validation::validate_password_change;
use crate::utils::{ApiError, PasswordValidationError};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordChangeError {
    #[error(transparent)]
    Invalid(#[from] PasswordValidationError),
    #[error("Invalid current password or authentication failed")]
    WrongCurrentPassword,
    #[error("{0}")]
    Rejected(String),
    #[error("User not found")]
    NotFound,
    #[error("no user id in the current session")]
    NoUserId,
    #[error(transparent)]
    Api(ApiError),
}

/// User-account service over the gateway
pub struct UserService {
    gateway: Arc<Gateway>,
}

impl UserService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        UserService { gateway }
    }

    /// Change the logged-in user's password
    ///
    /// Requires a session whose identity carries a user id. The current
    /// password is re-verified by the backend; a 401 here means it was wrong,
    /// not that the session expired.
    pub async fn change_password(
        &self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<(), PasswordChangeError> {
        validate_password_change(new, confirm)?;

        let user_id = self
            .gateway
            .session()
            .identity()
            .and_then(|identity| identity.user_id)
            .ok_or(PasswordChangeError::NoUserId)?;

        let body = json!({
            "currentPassword": current,
            "newPassword": new,
            "confirmPassword": confirm,
        });
        let request = ApiRequest::put(format!("/users/{}/password", user_id), body);

        match self.gateway.send(request).await {
            Ok(_) => Ok(()),
            Err(ApiError::AuthExpired) | Err(ApiError::AuthRejected) => {
                Err(PasswordChangeError::WrongCurrentPassword)
            }
            Err(ApiError::Validation(message)) => Err(PasswordChangeError::Rejected(message)),
            Err(ApiError::NotFound) => Err(PasswordChangeError::NotFound),
            Err(other) => Err(PasswordChangeError::Api(other)),
        }
    }
}
