//! Calendar date validation

use chrono::NaiveDate;

/// Checks that a string parses as a `YYYY-MM-DD` calendar date, the value
/// shape produced by a date input.
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Validates a date field value: presence first, then parseability.
pub fn validate_date(value: &str, required_message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(required_message.to_string());
    }
    if !is_valid_date(value) {
        return Err("Please provide a valid date".to_string());
    }
    Ok(())
}
