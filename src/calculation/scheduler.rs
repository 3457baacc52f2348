//! Pay period scheduling.
//!
//! This module turns a generation date range, a pay frequency and a pay day of
//! the week into an ordered sequence of contiguous pay periods.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayFrequency, PayPeriod, PeriodOverride};

/// Most periods a single request may schedule (50 years of weekly pay).
pub const MAX_PERIODS: i64 = 2600;

/// Returns the first date on or after `on_or_after` that falls on `pay_day`.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::next_pay_date;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2025-01-14 is a Tuesday
/// let end = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
/// assert_eq!(next_pay_date(end, Weekday::Fri).unwrap(), NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
/// assert_eq!(next_pay_date(end, Weekday::Tue).unwrap(), end);
/// ```
pub fn next_pay_date(on_or_after: NaiveDate, pay_day: Weekday) -> EngineResult<NaiveDate> {
    let target = pay_day.num_days_from_monday();
    let current = on_or_after.weekday().num_days_from_monday();
    let offset = (7 + target - current) % 7;
    add_days(on_or_after, u64::from(offset))
}

/// Builds the pay periods covering `generation_start..=generation_end`.
///
/// The number of periods is `ceil(days between start and end / period length)`,
/// with a minimum of one. Periods are laid end to end from `generation_start`;
/// the final period is not truncated and may run past `generation_end`.
///
/// Dates supplied in an override for a period index replace the computed
/// dates verbatim. Later periods are still laid out from the computed
/// schedule, not from the override.
///
/// # Errors
///
/// - [`EngineError::InvalidRange`] if `generation_end` is before `generation_start`,
///   or if the range needs more than [`MAX_PERIODS`] periods
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::schedule_periods;
/// use paystub_engine::models::PayFrequency;
/// use chrono::{NaiveDate, Weekday};
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
///
/// let biweekly = schedule_periods(start, end, PayFrequency::Biweekly, Weekday::Fri, &[]).unwrap();
/// assert_eq!(biweekly.len(), 1);
///
/// let weekly = schedule_periods(start, end, PayFrequency::Weekly, Weekday::Fri, &[]).unwrap();
/// assert_eq!(weekly.len(), 2);
/// ```
pub fn schedule_periods(
    generation_start: NaiveDate,
    generation_end: NaiveDate,
    pay_frequency: PayFrequency,
    pay_day_of_week: Weekday,
    overrides: &[PeriodOverride],
) -> EngineResult<Vec<PayPeriod>> {
    if generation_end < generation_start {
        return Err(EngineError::InvalidRange {
            start: generation_start,
            end: generation_end,
            message: "end is before start".to_string(),
        });
    }

    let period_length = pay_frequency.period_length_days();
    let total_days = (generation_end - generation_start).num_days();
    let period_count = ((total_days + period_length - 1) / period_length).max(1);
    if period_count > MAX_PERIODS {
        return Err(EngineError::InvalidRange {
            start: generation_start,
            end: generation_end,
            message: format!(
                "needs {} periods, more than the limit of {}",
                period_count, MAX_PERIODS
            ),
        });
    }

    let mut periods = Vec::with_capacity(period_count as usize);
    let mut start_date = generation_start;

    for index in 0..period_count as usize {
        let end_date = add_days(start_date, (period_length - 1) as u64)?;
        let pay_date = next_pay_date(end_date, pay_day_of_week)?;

        let mut period = PayPeriod {
            index,
            start_date,
            end_date,
            pay_date,
        };

        if let Some(period_override) = overrides.iter().rev().find(|o| o.index == index) {
            apply_date_override(&mut period, period_override);
        }

        debug!(
            index,
            start = %period.start_date,
            end = %period.end_date,
            pay_date = %period.pay_date,
            "Scheduled pay period"
        );

        periods.push(period);
        start_date = add_days(end_date, 1)?;
    }

    Ok(periods)
}

fn apply_date_override(period: &mut PayPeriod, period_override: &PeriodOverride) {
    if let Some(start_date) = period_override.start_date {
        period.start_date = start_date;
    }
    if let Some(end_date) = period_override.end_date {
        period.end_date = end_date;
    }
    if let Some(pay_date) = period_override.pay_date {
        period.pay_date = pay_date;
    }
}

fn add_days(date: NaiveDate, days: u64) -> EngineResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("date overflow adding {} days to {}", days, date),
        })
}
