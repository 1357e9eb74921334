use once_cell::sync::Lazy;
use regex::Regex;

use super::cell::CellValue;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_\s]").unwrap());

/// Resolve a free-form categorical value against a canonical vocabulary.
///
/// The input is stringified, lowercased, and trimmed, then compared to each
/// option two ways: exact, and with hyphens/underscores/whitespace stripped
/// from both sides. The first option that matches either way wins, so
/// `"Mid Level"`, `"mid_level"`, and `" MID-LEVEL "` all resolve to
/// `"mid-level"`. Returns `None` when nothing matches or the value is empty.
pub fn normalize_value(value: Option<&CellValue>, options: &'static [&'static str]) -> Option<&'static str> {
    let value = value?;
    if matches!(value, CellValue::Empty) {
        return None;
    }

    let normalized = value.to_display().to_lowercase().trim().to_string();
    if normalized.is_empty() {
        return None;
    }

    let collapsed = SEPARATORS.replace_all(&normalized, "");
    options
        .iter()
        .find(|option| {
            normalized == **option || collapsed == SEPARATORS.replace_all(option, "")
        })
        .copied()
}

/// Convenience wrapper for JSON inputs where the raw value is a plain string.
pub fn normalize_str(value: &str, options: &'static [&'static str]) -> Option<&'static str> {
    normalize_value(Some(&CellValue::Text(value.to_string())), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{VALID_EMPLOYMENT_TYPES, VALID_JOB_LEVELS, VALID_JOB_STATUSES};

    #[test]
    fn spelling_variants_collapse_to_one_canonical_value() {
        for input in ["Mid Level", "mid_level", " MID-LEVEL ", "midlevel"] {
            assert_eq!(normalize_str(input, VALID_JOB_LEVELS), Some("mid-level"), "input: {input:?}");
        }
    }

    #[test]
    fn exact_members_pass_through() {
        for &status in VALID_JOB_STATUSES {
            assert_eq!(normalize_str(status, VALID_JOB_STATUSES), Some(status));
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(normalize_str("manager", VALID_JOB_LEVELS), None);
        assert_eq!(normalize_str("", VALID_JOB_STATUSES), None);
        assert_eq!(normalize_value(None, VALID_JOB_STATUSES), None);
        assert_eq!(
            normalize_value(Some(&CellValue::Empty), VALID_JOB_STATUSES),
            None
        );
    }

    #[test]
    fn full_time_variants_normalize() {
        assert_eq!(normalize_str("Full Time", VALID_EMPLOYMENT_TYPES), Some("full-time"));
        assert_eq!(normalize_str("FULL-TIME", VALID_EMPLOYMENT_TYPES), Some("full-time"));
        assert_eq!(normalize_str("full_time", VALID_EMPLOYMENT_TYPES), Some("full-time"));
    }
}
