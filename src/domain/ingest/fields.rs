use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::cell::CellValue;

const MIN_GRADUATION_YEAR: i32 = 1900;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());

/// Accepts an integer or numeric string between 1900 and five years from
/// now (near-future admitted cohorts). Anything else is a data-entry error.
pub fn validate_graduation_year(value: &CellValue) -> Option<i32> {
    let year = match value {
        CellValue::Number(n) if n.fract() == 0.0 => *n as i32,
        CellValue::Text(s) => s.trim().parse::<i32>().ok()?,
        _ => return None,
    };

    let current_year = Utc::now().year();
    if year < MIN_GRADUATION_YEAR || year > current_year + 5 {
        return None;
    }
    Some(year)
}

/// Simple `local@domain.tld` shape check; returns the lowercased address.
pub fn validate_email(value: &CellValue) -> Option<String> {
    let email = value.to_display().to_lowercase();
    if email.is_empty() || !EMAIL_RE.is_match(&email) {
        return None;
    }
    Some(email)
}

/// A phone number is acceptable when it reduces to 7-15 digits. The
/// original string is returned, preserving whatever formatting the user
/// typed; email is normalized, phone is not.
pub fn validate_phone(value: &CellValue) -> Option<String> {
    let phone = value.to_display();
    if phone.is_empty() {
        return None;
    }

    let digits_only = NON_DIGIT_RE.replace_all(&phone, "");
    if digits_only.len() < MIN_PHONE_DIGITS || digits_only.len() > MAX_PHONE_DIGITS {
        return None;
    }
    Some(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn graduation_year_accepts_in_range_numbers_and_strings() {
        assert_eq!(validate_graduation_year(&CellValue::Number(1999.0)), Some(1999));
        assert_eq!(validate_graduation_year(&text("2021")), Some(2021));
        assert_eq!(validate_graduation_year(&text(" 1900 ")), Some(1900));
    }

    #[test]
    fn graduation_year_rejects_out_of_range_and_non_numeric() {
        let next_decade = Utc::now().year() + 6;
        assert_eq!(validate_graduation_year(&CellValue::Number(1899.0)), None);
        assert_eq!(validate_graduation_year(&CellValue::Number(next_decade as f64)), None);
        assert_eq!(validate_graduation_year(&text("soon")), None);
        assert_eq!(validate_graduation_year(&CellValue::Empty), None);
    }

    #[test]
    fn graduation_year_allows_near_future_cohorts() {
        let admitted = Utc::now().year() + 5;
        assert_eq!(
            validate_graduation_year(&CellValue::Number(admitted as f64)),
            Some(admitted)
        );
    }

    #[test]
    fn email_is_lowercased_on_success() {
        assert_eq!(
            validate_email(&text("Jane.Doe@Example.COM")),
            Some("jane.doe@example.com".to_string())
        );
    }

    #[test]
    fn malformed_emails_are_rejected()  {
        for bad in ["plainaddress", "a@b", "a b@c.com", "a@b@c.com", ""] {
            assert_eq!(validate_email(&text(bad)), None, "input: {bad:?}");
        }
    }

    #[test]
    fn phone_keeps_original_formatting() {
        assert_eq!(
            validate_phone(&text("(555) 123-4567")),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn phone_digit_count_bounds() {
        assert_eq!(validate_phone(&text("123456")), None);
        assert_eq!(validate_phone(&text("1234567")), Some("1234567".to_string()));
        assert_eq!(validate_phone(&text("123456789012345")), Some("123456789012345".to_string()));
        assert_eq!(validate_phone(&text("1234567890123456")), None);
    }

    #[test]
    fn numeric_phone_cells_are_stringified() {
        assert_eq!(
            validate_phone(&CellValue::Number(5551234567.0)),
            Some("5551234567".to_string())
        );
    }
}
