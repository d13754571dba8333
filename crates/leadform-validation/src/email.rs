//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Validate email format (RFC-lenient)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates an email field value: presence first, then format.
pub fn validate_email(email: &str, required_message: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err(required_message.to_string());
    }
    if !is_valid_email(email) {
        return Err("Please provide a valid email address".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("test@domain"));
    }

    #[test]
    fn test_validate_email_messages() {
        let err = validate_email("", "Please provide an email address").unwrap_err();
        assert_eq!(err, "Please provide an email address");

        let err = validate_email("not-an-email", "Please provide an email address").unwrap_err();
        assert_eq!(err, "Please provide a valid email address");

        assert!(validate_email("john@mail.com", "Please provide an email address").is_ok());
    }
}
