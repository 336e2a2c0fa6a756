//! Shared utility functions for SFB crates.

/// Date and timestamp utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Timestamp layouts accepted in transect files, tried in order.
    const TIMESTAMP_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
    }

    /// Parse a transect timestamp.
    ///
    /// Accepts a space or `T` separator, optional seconds and fractional
    /// seconds. A bare date is read as midnight. Returns `None` when no
    /// layout matches.
    pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| parse_date(s).ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
    }

    /// Midpoint between two timestamps.
    pub fn midpoint(a: &NaiveDateTime, b: &NaiveDateTime) -> NaiveDateTime {
        *a + (*b - *a) / 2
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2019, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2019-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_timestamp_layouts() {
            let expected = NaiveDate::from_ymd_opt(2019, 6, 15)
                .unwrap()
                .and_hms_opt(10, 23, 5)
                .unwrap();
            assert_eq!(parse_timestamp("2019-06-15 10:23:05"), Some(expected));
            assert_eq!(parse_timestamp("2019-06-15T10:23:05"), Some(expected));
            assert_eq!(parse_timestamp(" 2019-06-15 10:23:05.000 "), Some(expected));

            let minutes = parse_timestamp("2019-06-15 10:23").unwrap();
            assert_eq!(minutes.date(), expected.date());

            let midnight = parse_timestamp("2019-06-15").unwrap();
            assert_eq!(midnight.date(), expected.date());
            assert_eq!(midnight.time(), chrono::NaiveTime::MIN);
        }

        #[test]
        fn test_parse_timestamp_rejects_garbage() {
            assert_eq!(parse_timestamp("06/15/2019"), None);
            assert_eq!(parse_timestamp(""), None);
        }

        #[test]
        fn test_midpoint() {
            let a = parse_timestamp("2019-06-15 00:00:00").unwrap();
            let b = parse_timestamp("2019-06-17 12:00:00").unwrap();
            assert_eq!(midpoint(&a, &b), parse_timestamp("2019-06-16 06:00:00").unwrap());
        }
    }
}

/// Numeric helpers
pub mod numbers {
    /// Round to three decimal places.
    pub fn round3(value: f64) -> f64 {
        (value * 1000.0).round() / 1000.0
    }

    /// Median of an already sorted slice. Even lengths average the two
    /// middle values.
    pub fn sorted_median(sorted: &[f64]) -> Option<f64> {
        let n = sorted.len();
        if n == 0 {
            return None;
        }
        if n % 2 == 1 {
            Some(sorted[n / 2])
        } else {
            Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_round3() {
            assert_eq!(round3(1.23456), 1.235);
            assert_eq!(round3(-0.0004), -0.0);
            assert_eq!(round3(12.0), 12.0);
        }

        #[test]
        fn test_sorted_median() {
            assert_eq!(sorted_median(&[]), None);
            assert_eq!(sorted_median(&[3.0]), Some(3.0));
            assert_eq!(sorted_median(&[1.0, 2.0, 9.0]), Some(2.0));
            assert_eq!(sorted_median(&[1.0, 2.0, 4.0, 9.0]), Some(3.0));
        }
    }
}

/// Label helpers
pub mod labels {
    /// Turn a column key into a display label: underscores become spaces and
    /// each word is capitalised ("water_temp" -> "Water Temp").
    pub fn title_case(key: &str) -> String {
        key.split('_')
            .filter(|w| !w.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

}
