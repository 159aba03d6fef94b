//! Hour label parsing.
//!
//! Hour buckets are labelled like `"14시"`. Sorting those labels as strings
//! puts `"10시"` before `"2시"`, so the numeric hour is extracted and used
//! for ordering instead.

use std::sync::LazyLock;

use regex::Regex;
use seoul_dust_normalize_models::{NormalizedTrafficHour, TrafficHourRecord};

use crate::NormalizeError;

/// Column holding the hour label.
pub const HOUR_FIELD: &str = "hour";

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").unwrap_or_else(|_| unreachable!()));

/// Extracts the hour of day from the first run of digits in `label`.
///
/// Only ASCII digits count. Full-width or other non-ASCII digits, as in
/// `"１４시"`, are treated as no digits at all.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidRecord`] if the label has no digits or
/// the number is not an hour of day (0-23).
pub fn parse_hour(label: &str) -> Result<u8, NormalizeError> {
    let digits = DIGIT_RUN
        .find(label)
        .ok_or_else(|| NormalizeError::invalid(HOUR_FIELD, format!("has no digits: {label:?}")))?
        .as_str();

    match digits.parse::<u8>() {
        Ok(hour) if hour <= 23 => Ok(hour),
        _ => Err(NormalizeError::invalid(
            HOUR_FIELD,
            format!("{digits} is not an hour of day (0-23)"),
        )),
    }
}

/// Adds the numeric hour to a traffic record.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidRecord`] if the hour label cannot be
/// parsed.
pub fn normalize_traffic_hour(
    record: &TrafficHourRecord,
) -> Result<NormalizedTrafficHour, NormalizeError> {
    Ok(NormalizedTrafficHour {
        hour_label: record.hour_label.clone(),
        hour_index: parse_hour(&record.hour_label)?,
        avg_traffic: record.avg_traffic,
    })
}

/// Sorts traffic records by hour ascending. Records sharing an hour keep
/// their input order.
pub fn sort_by_hour(records: &mut [NormalizedTrafficHour]) {
    records.sort_by_key(|record| record.hour_index);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traffic(label: &str) -> NormalizedTrafficHour {
        normalize_traffic_hour(&TrafficHourRecord {
            hour_label: label.to_string(),
            avg_traffic: 100.0,
        })
        .unwrap()
    }

    #[test]
    fn non_ascii_digits_are_not_hours() {
        let err = parse_hour("１４시").unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidRecord { .. }));
        assert!(parse_hour("٣시").is_err());
        assert_eq!(parse_hour("１4시").unwrap(), 4);
    }

    #[test]
    fn parses_every_hour_of_day() {
        for n in 0..=23u8 {
            assert_eq!(parse_hour(&format!("{n}시")).unwrap(), n);
        }
    }

    #[test]
    fn uses_first_digit_run() {
        assert_eq!(parse_hour("오전 7시 30분").unwrap(), 7);
        assert_eq!(parse_hour("07시").unwrap(), 7);
        assert_eq!(parse_hour("9").unwrap(), 9);
    }

    #[test]
    fn rejects_label_without_digits() {
        let err = parse_hour("새벽").unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::InvalidRecord { ref field, .. } if field == HOUR_FIELD
        ));
    }

    #[test]
    fn rejects_out_of_range_hours() {
        assert!(parse_hour("24시").is_err());
        assert!(parse_hour("300시").is_err());
        assert!(parse_hour("99999999999999999999시").is_err());
    }

    #[test]
    fn sorts_numerically_not_lexicographically() {
        let mut records = vec![traffic("2시"), traffic("10시"), traffic("1시")];
        sort_by_hour(&mut records);
        let labels: Vec<&str> = records.iter().map(|r| r.hour_label.as_str()).collect();
        assert_eq!(labels, ["1시", "2시", "10시"]);
    }

    #[test]
    fn sort_matches_sorting_by_hour_directly() {
        let hours = [23u8, 0, 15, 4, 10, 9, 1, 20];
        let mut records: Vec<_> = hours.iter().map(|h| traffic(&format!("{h}시"))).collect();
        sort_by_hour(&mut records);

        let mut expected = hours.to_vec();
        expected.sort_unstable();
        let sorted: Vec<u8> = records.iter().map(|r| r.hour_index).collect();
        assert_eq!(sorted, expected);
    }
}
