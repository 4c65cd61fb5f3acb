//! Common validation utilities

/// Validation functions for request input
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    /// Minimum accepted password length
    pub const MIN_PASSWORD_LENGTH: usize = 6;

    static EMAIL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if an email address is well-formed
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }

    /// Check if a password meets the minimum length
    pub fn meets_min_password_length(password: &str) -> bool {
        password.len() >= MIN_PASSWORD_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_length() {
        assert!(meets_min_password_length("secret1"));
        assert!(meets_min_password_length("123456"));
        assert!(!meets_min_password_length("12345"));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("value"));
        assert!(!not_empty("   "));
    }
}
