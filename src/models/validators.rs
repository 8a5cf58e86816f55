//! Field format validators shared by the request models

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("invalid phone regex"));

/// ISBN-10 or ISBN-13, checked after stripping separators
static ISBN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d{10}|\d{13})$").expect("invalid isbn regex"));

pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Valid email is required".into()))
    }
}

pub fn validate_phone_format(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Valid phone number is required".into()))
    }
}

pub fn validate_isbn_format(isbn: &str) -> Result<(), ValidationError> {
    let digits: String = isbn.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    if ISBN_RE.is_match(&digits) {
        Ok(())
    } else {
        Err(ValidationError::new("isbn")
            .with_message("Valid ISBN is required (10 or 13 digits)".into()))
    }
}

/// Publication years are bounded to [1000, current year]
pub fn validate_published_year(year: i32) -> Result<(), ValidationError> {
    use chrono::Datelike;

    let current_year = chrono::Utc::now().year();
    if (1000..=current_year).contains(&year) {
        Ok(())
    } else {
        Err(ValidationError::new("published_year")
            .with_message("Valid publication year is required".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(validate_email_format("john@example.com").is_ok());
        assert!(validate_email_format("not-an-email").is_err());
        assert!(validate_email_format("a b@example.com").is_err());
    }

    #[test]
    fn phone_format() {
        assert!(validate_phone_format("+1234567890").is_ok());
        assert!(validate_phone_format("(123) 456-7890").is_ok());
        assert!(validate_phone_format("12345").is_err());
        assert!(validate_phone_format("abcdefghij").is_err());
    }

    #[test]
    fn isbn_format() {
        assert!(validate_isbn_format("9780451524935").is_ok());
        assert!(validate_isbn_format("978-0-451-52493-5").is_ok());
        assert!(validate_isbn_format("0451524934").is_ok());
        assert!(validate_isbn_format("12345").is_err());
    }

    #[test]
    fn published_year_bounds() {
        assert!(validate_published_year(1949).is_ok());
        assert!(validate_published_year(1000).is_ok());
        assert!(validate_published_year(999).is_err());
        assert!(validate_published_year(9999).is_err());
    }
}
