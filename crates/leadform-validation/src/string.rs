//! String validation functions

/// Checks that a string has content after trimming surrounding whitespace.
pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Validates that a required text value is present
pub fn validate_required_text(s: &str, message: &str) -> Result<(), String> {
    if is_present(s) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Validates string length in characters
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Value restriction against a fixed option list
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Basic URL validation: http/https protocol plus a dotted domain.
pub fn is_valid_url(url: &str) -> bool {
    let after_protocol = if let Some(after) = url.strip_prefix("https://") {
        after
    } else if let Some(after) = url.strip_prefix("http://") {
        after
    } else {
        return false;
    };

    !after_protocol.is_empty() && after_protocol.contains('.')
}

/// Validates a URL field value: presence first, then format.
pub fn validate_url(url: &str, required_message: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err(required_message.to_string());
    }
    if !is_valid_url(url) {
        return Err("Please provide a valid URL".to_string());
    }
    Ok(())
}
