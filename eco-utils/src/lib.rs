//! Shared utility functions for EcoVision crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Wire format for every date the backend accepts: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_format_pads_single_digits() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
            assert_eq!(format_date(&date), "2024-01-05");
        }

        #[test]
        fn test_parse_rejects_other_layouts() {
            assert!(parse_date("20240105").is_err());
            assert!(parse_date("01/05/2024").is_err());
            assert!(parse_date("").is_err());
        }
    }
}

/// Numeric helpers shared by the normalizers
pub mod numbers {
    /// Round to one decimal place, half away from zero.
    pub fn round1(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }

    /// `part / whole * 100`, rounded to one decimal. `None` when `whole` is zero.
    pub fn percentage(part: usize, whole: usize) -> Option<f64> {
        if whole == 0 {
            return None;
        }
        Some(round1(part as f64 / whole as f64 * 100.0))
    }

}
