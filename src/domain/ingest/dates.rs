use chrono::{Duration, NaiveDate, Utc};
use tracing::warn;

use super::cell::CellValue;

/// Day zero of the spreadsheet serial-date scheme: serial 1 is 1899-12-31,
/// serial 44927 is 2023-01-01. Fractional parts carry time of day and are
/// discarded.
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

fn excel_epoch() -> NaiveDate {
    let (y, m, d) = EXCEL_EPOCH;
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Decode a spreadsheet serial number into a calendar date.
pub fn from_excel_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial <= 0.0 {
        return None;
    }
    excel_epoch().checked_add_signed(Duration::days(serial.floor() as i64))
}

/// Inverse of [`from_excel_serial`], for symmetry checks and exports.
pub fn to_excel_serial(date: NaiveDate) -> i64 {
    (date - excel_epoch()).num_days()
}

/// Lenient date policy, used for event dates.
///
/// Accepts an ISO `YYYY-MM-DD` string as-is, a numeric serial, or an
/// `M/D/YYYY` slash date (zero-padded on reassembly). Anything else logs a
/// warning and falls back to today's date instead of rejecting the row.
/// See `parse_date_strict` for the rejecting variant.
pub fn parse_date_lenient(value: &CellValue) -> NaiveDate {
    if let Some(serial) = value.as_number() {
        if let Some(date) = from_excel_serial(serial) {
            return date;
        }
    }

    if let Some(text) = value.as_text() {
        let text = text.trim();

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return date;
        }

        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() == 3 {
            let reassembled =
                format!("{}-{:0>2}-{:0>2}", parts[2], parts[0], parts[1]);
            if let Ok(date) = NaiveDate::parse_from_str(&reassembled, "%Y-%m-%d") {
                return date;
            }
        }

        warn!(input = text, "unable to parse date, falling back to today");
    }

    let fallback = Utc::now().date_naive();
    warn!(%fallback, "fallback date used");
    fallback
}

/// Strict date policy, used for job application deadlines: a serial number
/// or a parseable date string, otherwise `None` and the row is rejected.
pub fn parse_date_strict(value: &CellValue) -> Option<NaiveDate> {
    if let Some(serial) = value.as_number() {
        return from_excel_serial(serial);
    }

    let text = value.as_text()?.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y/%m/%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn iso(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn serial_44927_is_new_years_day_2023() {
        assert_eq!(from_excel_serial(44927.0), Some(iso(2023, 1, 1)));
    }

    #[test]
    fn serial_round_trip_is_lossless() {
        let date = from_excel_serial(45000.0).unwrap();
        assert_eq!(to_excel_serial(date), 45000);
    }

    #[test]
    fn fractional_serials_drop_the_time_of_day() {
        assert_eq!(from_excel_serial(44927.75), Some(iso(2023, 1, 1)));
    }

    #[test]
    fn lenient_passes_iso_strings_through() {
        assert_eq!(parse_date_lenient(&text("2024-06-15")), iso(2024, 6, 15));
    }

    #[test]
    fn lenient_zero_pads_slash_dates() {
        assert_eq!(parse_date_lenient(&text("3/7/2024")), iso(2024, 3, 7));
        assert_eq!(parse_date_lenient(&text(" 12/25/2023 ")), iso(2023, 12, 25));
    }

    #[test]
    fn lenient_decodes_serials() {
        assert_eq!(parse_date_lenient(&CellValue::Number(44927.0)), iso(2023, 1, 1));
    }

    #[test]
    fn lenient_falls_back_to_today_on_garbage() {
        let today = Utc::now().date_naive();
        assert_eq!(parse_date_lenient(&text("next Tuesday")), today);
        assert_eq!(parse_date_lenient(&text("13/40/2099")), today);
        assert_eq!(parse_date_lenient(&CellValue::Empty), today);
    }

    #[test]
    fn strict_rejects_what_lenient_forgives() {
        assert_eq!(parse_date_strict(&text("next Tuesday")), None);
        assert_eq!(parse_date_strict(&CellValue::Empty), None);
        assert_eq!(parse_date_strict(&text("2024-06-15")), Some(iso(2024, 6, 15)));
        assert_eq!(parse_date_strict(&text("06/15/2024")), Some(iso(2024, 6, 15)));
        assert_eq!(parse_date_strict(&CellValue::Number(44927.0)), Some(iso(2023, 1, 1)));
    }
}
