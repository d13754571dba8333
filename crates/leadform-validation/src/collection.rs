//! Validation for variable-length text entry lists

/// Validates an expanding list of text entries: every entry must have
/// content after trimming. An empty list is valid unless `required` is
/// set, in which case at least one entry must exist.
pub fn validate_text_list(items: &[String], required: bool, message: &str) -> Result<(), String> {
    if items.is_empty() {
        if required {
            return Err(message.to_string());
        }
        return Ok(());
    }
    if items.iter().any(|item| item.trim().is_empty()) {
        return Err("Please fill out or remove empty entries".to_string());
    }
    Ok(())
}

/// Per-entry invalid state for rendering: true when the entry trims to empty.
pub fn entry_is_invalid(entry: &str) -> bool {
    entry.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list_optional() {
        assert!(validate_text_list(&[], false, "Please add an entry").is_ok());
    }

    #[test]
    fn test_empty_list_required() {
        let err = validate_text_list(&[], true, "Please add an entry").unwrap_err();
        assert_eq!(err, "Please add an entry");
    }

    #[test]
    fn test_blank_entries_rejected() {
        assert!(validate_text_list(&list(&["8(a)", "WOSB"]), false, "m").is_ok());
        assert!(validate_text_list(&list(&["8(a)", ""]), false, "m").is_err());
        assert!(validate_text_list(&list(&["   "]), false, "m").is_err());
    }

    #[test]
    fn test_entry_invalid_state() {
        assert!(entry_is_invalid(""));
        assert!(entry_is_invalid("  "));
        assert!(!entry_is_invalid("HUBZone"));
    }
}
