//! North-American phone number validation and progressive formatting

/// Validate a US/Canada phone number: exactly 10 digits after stripping
/// separators. Accepts `(123) 456-7890`, `123-456-7890`, `1234567890`.
pub fn is_valid_phone(phone: &str) -> bool {
    let digit_count = phone.chars().filter(|c| c.is_ascii_digit()).count();
    digit_count == 10
}

/// Validates a phone field value: presence first, then the 10-digit shape.
pub fn validate_phone(phone: &str, required_message: &str) -> Result<(), String> {
    if phone.trim().is_empty() {
        return Err(required_message.to_string());
    }
    if !is_valid_phone(phone) {
        return Err("Please provide a valid phone number".to_string());
    }
    Ok(())
}

/// Progressively formats a phone number as digits are typed:
/// fewer than 4 digits are returned raw, fewer than 7 render as
/// `(DDD) DDD`, and 7 or more render as `(DDD) DDD-DDDD` using the first
/// ten digits. Idempotent on already-formatted input; empty input is
/// returned unchanged.
pub fn format_phone_number(value: &str) -> String {
    if value.is_empty() {
        return value.to_string();
    }

    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 4 {
        return digits.into_iter().collect();
    }

    let area: String = digits[..3].iter().collect();
    if digits.len() < 7 {
        let exchange: String = digits[3..].iter().collect();
        return format!("({}) {}", area, exchange);
    }

    let exchange: String = digits[3..6].iter().collect();
    let line: String = digits[6..digits.len().min(10)].iter().collect();
    format!("({}) {}-{}", area, exchange, line)
}
