//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type produced by the period scheduler.
//! A pay period is the date span one pay stub covers, plus the date it is paid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one computed pay period.
///
/// Periods produced by the scheduler are contiguous and non-overlapping: the day
/// after one period's `end_date` is the next period's `start_date`. Caller
/// overrides may replace any of the dates verbatim.
///
/// # Example
///
/// ```
/// use paystub_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     index: 0,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
///     pay_date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
/// assert_eq!(period.length_days(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Zero-based position of this period within the generated range.
    pub index: usize,
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// The date the period is paid.
    pub pay_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days covered, counting both ends.
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_biweekly_period() -> PayPeriod {
        PayPeriod {
            index: 0,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 1, 14),
            pay_date: date(2025, 1, 17),
        }
    }

    /// PP-001: contains_date within period
    #[test]
    fn test_contains_date_within_period() {
        let period = create_biweekly_period();
        assert!(period.contains_date(date(2025, 1, 8)));
    }

    /// PP-002: contains_date outside period
    #[test]
    fn test_contains_date_outside_period() {
        let period = create_biweekly_period();
        assert!(!period.contains_date(date(2025, 1, 15)));
        assert!(!period.contains_date(date(2024, 12, 31)));
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = create_biweekly_period();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_length_days_is_inclusive() {
        assert_eq!(create_biweekly_period().length_days(), 14);
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = create_biweekly_period();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"index\":0"));
        assert!(json.contains("\"start_date\":\"2025-01-01\""));
        assert!(json.contains("\"end_date\":\"2025-01-14\""));
        assert!(json.contains("\"pay_date\":\"2025-01-17\""));
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{
            "index": 3,
            "start_date": "2025-02-12",
            "end_date": "2025-02-25",
            "pay_date": "2025-02-28"
        }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.index, 3);
        assert_eq!(period.pay_date, date(2025, 2, 28));
    }
}
