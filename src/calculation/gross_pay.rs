//! Gross pay calculation for a single period.
//!
//! Salary workers are paid an even share of the annual salary each period.
//! Hourly workers are paid their rate for regular hours and time and a half
//! for overtime hours. Commission is added in both cases.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayFrequency, PayType, PayrollRequest, PeriodOverride};

use super::checked;
use super::rounding::round_currency;

/// Overtime pay multiplier (time and a half).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The gross pay for one period and the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrossPayResult {
    /// Regular hours used.
    pub hours: Decimal,
    /// Overtime hours used.
    pub overtime_hours: Decimal,
    /// Commission added.
    pub commission: Decimal,
    /// Gross pay, rounded to cents.
    pub gross_pay: Decimal,
}

/// Calculates gross pay for one period.
///
/// Hours default to the frequency's regular hours (80 biweekly, 40 weekly),
/// overtime and commission default to zero; an override replaces any of them.
///
/// - Salary: `annual_salary / periods_per_year` (rounded to cents) `+ commission`
/// - Hourly: `rate * hours + rate * 1.5 * overtime_hours + commission`
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] if the rate or salary the pay
/// type needs is missing, if any money or hours input is negative, or if the
/// gross is too large to represent.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::calculate_gross_pay;
/// use paystub_engine::models::{PayFrequency, PayrollRequest};
/// use rust_decimal::Decimal;
///
/// let request: PayrollRequest = serde_json::from_str(r#"{
///     "worker_type": "employee",
///     "pay_type": "hourly",
///     "rate": "25",
///     "pay_frequency": "biweekly",
///     "pay_day_of_week": "Fri",
///     "generation_start": "2025-01-01",
///     "generation_end": "2025-01-14"
/// }"#).unwrap();
///
/// let result = calculate_gross_pay(&request, PayFrequency::Biweekly, None).unwrap();
/// assert_eq!(result.gross_pay, Decimal::from(2000));
/// ```
pub fn calculate_gross_pay(
    request: &PayrollRequest,
    pay_frequency: PayFrequency,
    period_override: Option<&PeriodOverride>,
) -> EngineResult<GrossPayResult> {
    let hours = period_override
        .and_then(|o| o.hours)
        .unwrap_or_else(|| pay_frequency.default_hours());
    let overtime_hours = period_override
        .and_then(|o| o.overtime_hours)
        .unwrap_or(Decimal::ZERO);
    let commission = period_override
        .and_then(|o| o.commission)
        .unwrap_or(Decimal::ZERO);

    ensure_non_negative("hours", hours)?;
    ensure_non_negative("overtime_hours", overtime_hours)?;
    ensure_non_negative("commission", commission)?;

    let gross_pay = match request.pay_type {
        PayType::Salary => {
            let annual_salary = request.annual_salary.ok_or_else(|| {
                EngineError::invalid_configuration("annual_salary", "is required for salary pay")
            })?;
            ensure_non_negative("annual_salary", annual_salary)?;
            let per_period =
                round_currency(annual_salary / Decimal::from(pay_frequency.periods_per_year()));
            checked::add(per_period, commission, "gross_pay")?
        }
        PayType::Hourly => {
            let rate = request.rate.ok_or_else(|| {
                EngineError::invalid_configuration("rate", "is required for hourly pay")
            })?;
            ensure_non_negative("rate", rate)?;
            let regular = checked::mul(rate, hours, "gross_pay")?;
            let overtime_rate = checked::mul(rate, OVERTIME_MULTIPLIER, "gross_pay")?;
            let overtime = checked::mul(overtime_rate, overtime_hours, "gross_pay")?;
            checked::sum([regular, overtime, commission], "gross_pay")?
        }
    };

    Ok(GrossPayResult {
        hours,
        overtime_hours,
        commission,
        gross_pay: round_currency(gross_pay),
    })
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_configuration(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Jurisdiction, WorkerType};
    use chrono::{NaiveDate, Weekday};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_request(pay_type: PayType, rate: Option<&str>, salary: Option<&str>) -> PayrollRequest {
        PayrollRequest {
            worker_type: WorkerType::Employee,
            pay_type,
            rate: rate.map(dec),
            annual_salary: salary.map(dec),
            pay_frequency: Some(PayFrequency::Biweekly),
            pay_day_of_week: Weekday::Fri,
            generation_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            generation_end: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
            jurisdiction: Jurisdiction::default(),
            federal_filing_status: None,
            state_allowance_count: 0,
            overrides: vec![],
            deductions: vec![],
            contributions: vec![],
            benefits: vec![],
            absence_plans: vec![],
        }
    }

    /// GP-001: hourly biweekly defaults to 80 hours
    #[test]
    fn test_hourly_biweekly_default_hours() {
        let request = create_request(PayType::Hourly, Some("25"), None);
        let result = calculate_gross_pay(&request, PayFrequency::Biweekly, None).unwrap();

        assert_eq!(result.hours, dec("80"));
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.gross_pay, dec("2000.00"));
    }

    /// GP-002: hourly weekly defaults to 40 hours
    #[test]
    fn test_hourly_weekly_default_hours() {
        let request = create_request(PayType::Hourly, Some("25"), None);
        let result = calculate_gross_pay(&request, PayFrequency::Weekly, None).unwrap();

        assert_eq!(result.hours, dec("40"));
        assert_eq!(result.gross_pay, dec("1000.00"));
    }

    /// GP-003: overtime paid at time and a half plus commission
    #[test]
    fn test_hourly_overtime_and_commission() {
        let request = create_request(PayType::Hourly, Some("20"), None);
        let period_override = PeriodOverride {
            index: 0,
            hours: Some(dec("76")),
            overtime_hours: Some(dec("6")),
            commission: Some(dec("150.25")),
            ..Default::default()
        };

        let result =
            calculate_gross_pay(&request, PayFrequency::Biweekly, Some(&period_override)).unwrap();

        // 20 * 76 + 20 * 1.5 * 6 + 150.25 = 1520 + 180 + 150.25
        assert_eq!(result.gross_pay, dec("1850.25"));
        assert_eq!(result.commission, dec("150.25"));
    }

    /// GP-004: salary split evenly and rounded to cents
    #[test]
    fn test_salary_per_period_rounded() {
        let request = create_request(PayType::Salary, None, Some("50000"));
        let result = calculate_gross_pay(&request, PayFrequency::Biweekly, None).unwrap();

        // 50000 / 26 = 1923.0769...
        assert_eq!(result.gross_pay, dec("1923.08"));
    }

    #[test]
    fn test_salary_ignores_overtime_but_adds_commission() {
        let request = create_request(PayType::Salary, None, Some("52000"));
        let period_override = PeriodOverride {
            index: 0,
            overtime_hours: Some(dec("10")),
            commission: Some(dec("500")),
            ..Default::default()
        };

        let result =
            calculate_gross_pay(&request, PayFrequency::Weekly, Some(&period_override)).unwrap();

        assert_eq!(result.gross_pay, dec("1500.00"));
    }

    #[test]
    fn test_missing_rate_is_invalid_configuration() {
        let request = create_request(PayType::Hourly, None, Some("50000"));
        match calculate_gross_pay(&request, PayFrequency::Biweekly, None) {
            Err(EngineError::InvalidConfiguration { field, .. }) => assert_eq!(field, "rate"),
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_salary_is_invalid_configuration() {
        let request = create_request(PayType::Salary, Some("25"), None);
        match calculate_gross_pay(&request, PayFrequency::Biweekly, None) {
            Err(EngineError::InvalidConfiguration { field, .. }) => {
                assert_eq!(field, "annual_salary")
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_override_hours_rejected() {
        let request = create_request(PayType::Hourly, Some("25"), None);
        let period_override = PeriodOverride {
            index: 0,
            hours: Some(dec("-1")),
            ..Default::default()
        };
        match calculate_gross_pay(&request, PayFrequency::Biweekly, Some(&period_override)) {
            Err(EngineError::InvalidConfiguration { field, .. }) => assert_eq!(field, "hours"),
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_hours_is_zero_gross() {
        let request = create_request(PayType::Hourly, Some("25"), None);
        let period_override = PeriodOverride {
            index: 0,
            hours: Some(Decimal::ZERO),
            ..Default::default()
        };
        let result =
            calculate_gross_pay(&request, PayFrequency::Biweekly, Some(&period_override)).unwrap();
        assert_eq!(result.gross_pay, Decimal::ZERO);
    }

    #[test]
    fn test_rate_too_large_for_gross_is_error() {
        // 1e27 * 80 hours exceeds the largest Decimal.
        let request = create_request(PayType::Hourly, Some("1000000000000000000000000000"), None);
        match calculate_gross_pay(&request, PayFrequency::Biweekly, None) {
            Err(EngineError::InvalidConfiguration { field, .. }) => assert_eq!(field, "gross_pay"),
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_commission_too_large_for_salary_gross_is_error() {
        let request = create_request(PayType::Salary, None, Some("52000"));
        let period_override = PeriodOverride {
            index: 0,
            commission: Some(Decimal::MAX),
            ..Default::default()
        };
        assert!(matches!(
            calculate_gross_pay(&request, PayFrequency::Biweekly, Some(&period_override)),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }
}
