//! Email format validation

use once_cell::sync::Lazy;
use regex::Regex;

// Local part: alphanumerics plus ._%+-, domain: alphanumerics plus .-,
// TLD: 2-4 letters. Longer TLDs are rejected on purpose.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").unwrap()
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co"));
        assert!(is_valid_email("user+tag@example.info"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("USER%x@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user example@example.com"));
    }

    #[test]
    fn test_tld_length_bounds() {
        assert!(is_valid_email("user@example.co"));
        assert!(is_valid_email("user@example.name"));
        // Single-letter and 5+ letter TLDs fall outside the accepted range
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.museum"));
        assert!(!is_valid_email("user@example.12"));
    }
}
