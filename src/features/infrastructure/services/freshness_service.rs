use chrono::{Datelike, NaiveDateTime};

use crate::shared::constants::MONTH_NAMES_ID;

/// Format the latest update timestamp as "<day> <bulan> <year>", e.g. "3 Maret 2024".
///
/// The month name comes from a fixed table so the output does not depend on
/// the host's locale data. The timestamp is formatted as stored, without any
/// timezone conversion.
pub fn format_last_updated(timestamp: Option<NaiveDateTime>) -> Option<String> {
    let timestamp = timestamp?;
    let month = MONTH_NAMES_ID[timestamp.month0() as usize];
    Some(format!("{} {} {:04}", timestamp.day(), month, timestamp.year()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(14, 30, 0))
    }

    #[test]
    fn test_formats_indonesian_date() {
        assert_eq!(format_last_updated(at(2024, 3, 3)).as_deref(), Some("3 Maret 2024"));
    }

    #[test]
    fn test_day_has_no_leading_zero() {
        assert_eq!(format_last_updated(at(2025, 1, 9)).as_deref(), Some("9 Januari 2025"));
        assert_eq!(
            format_last_updated(at(2023, 12, 31)).as_deref(),
            Some("31 Desember 2023")
        );
    }

    #[test]
    fn test_every_month_has_a_name() {
        for month in 1..=12 {
            let formatted = format_last_updated(at(2024, month, 15)).unwrap();
            assert_eq!(
                formatted,
                format!("15 {} 2024", MONTH_NAMES_ID[month as usize - 1])
            );
        }
        assert_eq!(format_last_updated(at(2024, 8, 17)).as_deref(), Some("17 Agustus 2024"));
    }

    #[test]
    fn test_missing_timestamp_is_none() {
        assert_eq!(format_last_updated(None), None);
    }
}
