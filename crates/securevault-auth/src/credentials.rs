//! Credential input rules
//!
//! Checked before any call to the account store, so malformed input never
//! costs a round trip.

use crate::error::{AuthError, AuthResult};

/// Number of digits in a PIN
pub const PIN_LENGTH: usize = 4;

/// Exactly four ASCII digits
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}

/// Registration form rules: every field present, PIN well-formed
pub fn validate_registration(name: &str, email: &str, pin: &str, password: &str) -> AuthResult<()> {
    require("name", name)?;
    require("email", email)?;
    require("password", password)?;
    require_pin(pin)
}

/// Login form rules
pub fn validate_login(email: &str, pin: &str) -> AuthResult<()> {
    require("email", email)?;
    require_pin(pin)
}

fn require(field: &str, value: &str) -> AuthResult<()> {
    if value.trim().is_empty() {
        return Err(AuthError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn require_pin(pin: &str) -> AuthResult<()> {
    if !is_valid_pin(pin) {
        return Err(AuthError::Validation(format!(
            "PIN must be exactly {} digits",
            PIN_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_shape() {
        assert!(is_valid_pin("0000"));
        assert!(is_valid_pin("1234"));
        assert!(!is_valid_pin("123"));
        assert!(!is_valid_pin("12345"));
        assert!(!is_valid_pin("12a4"));
        assert!(!is_valid_pin("١٢٣٤"));
    }

    #[test]
    fn test_registration_requires_every_field() {
        assert!(validate_registration("Asha", "asha@example.com", "1234", "pw").is_ok());

        let err = validate_registration("", "asha@example.com", "1234", "pw").unwrap_err();
        assert_eq!(err.to_string(), "name is required");

        let err = validate_registration("Asha", "asha@example.com", "1234", "  ").unwrap_err();
        assert_eq!(err.to_string(), "password is required");

        let err = validate_registration("Asha", "asha@example.com", "12", "pw").unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_login_rules() {
        assert!(validate_login("asha@example.com", "1234").is_ok());
        assert!(validate_login("", "1234").is_err());
        assert!(validate_login("asha@example.com", "abcd").is_err());
    }
}
