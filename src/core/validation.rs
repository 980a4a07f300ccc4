//! Client-side validation for the password-change flow
//!
//! Runs before any request is issued so obviously bad input never reaches the
//! wire. Mirrors the backend's own rules; the server still re-validates.

use crate::constants::{MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARS};
use crate::utils::PasswordValidationError;

/// Validate a new password and its confirmation
pub fn validate_password_change(
    new_password: &str,
    confirm_password: &str,
) -> Result<(), PasswordValidationError> {
    if new_password != confirm_password {
        return Err(PasswordValidationError::ConfirmationMismatch);
    }

    if !is_valid_password(new_password) {
        return Err(PasswordValidationError::InvalidFormat);
    }

    Ok(())
}

/// Minimum length, and only letters, digits, or the allowed specials
fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password_change("longenough1", "longenough1").is_ok());
        assert!(validate_password_change("P@ssw0rd!", "P@ssw0rd!").is_ok());
        assert!(validate_password_change("____----", "____----").is_ok());
    }

    #[test]
    fn test_confirmation_mismatch() {
        assert_eq!(
            validate_password_change("longenough1", "longenough2"),
            Err(PasswordValidationError::ConfirmationMismatch)
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_password_change("short1", "short1"),
            Err(PasswordValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_disallowed_characters() {
        assert_eq!(
            validate_password_change("password with spaces", "password with spaces"),
            Err(PasswordValidationError::InvalidFormat)
        );
        assert_eq!(
            validate_password_change("pässword1", "pässword1"),
            Err(PasswordValidationError::InvalidFormat)
        );
    }
}
