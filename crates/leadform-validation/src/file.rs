//! File presence and content-type validation

/// Validates that a file has been chosen. `chosen` is the presence of a
/// selected file; callers skip this check entirely when the field's gate
/// is off.
pub fn validate_file_present(chosen: bool, message: &str) -> Result<(), String> {
    if chosen {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Validates a chosen file's MIME type against an expected content type.
pub fn validate_file_type(content_type: &str, expected: &str) -> Result<(), String> {
    if content_type.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(format!("File must be of type {}", expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_presence() {
        assert!(validate_file_present(true, "Please attach the agreement").is_ok());
        let err = validate_file_present(false, "Please attach the agreement").unwrap_err();
        assert_eq!(err, "Please attach the agreement");
    }

    #[test]
    fn test_file_type() {
        assert!(validate_file_type("application/pdf", "application/pdf").is_ok());
        assert!(validate_file_type("Application/PDF", "application/pdf").is_ok());
        let err = validate_file_type("image/png", "application/pdf").unwrap_err();
        assert_eq!(err, "File must be of type application/pdf");
    }
}
