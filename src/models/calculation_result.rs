//! Calculation result models for the pay stub engine.
//!
//! This module contains the [`PeriodResult`] and [`AggregateResult`] types and
//! the line structures the document renderer prints. Every money field is
//! already rounded to cents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AbsencePlanItem, PayPeriod};

/// A resolved deduction or contribution line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAmount {
    /// The catalog type the item was configured with.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Display name.
    pub name: String,
    /// Whether the item is recorded as pre-tax.
    pub is_pre_tax: bool,
    /// The amount taken from this period's pay.
    pub amount: Decimal,
}

/// A resolved employer benefit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitAmount {
    /// The catalog type the benefit was configured with.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Display name.
    pub name: String,
    /// The amount the employer funds for this period.
    pub amount: Decimal,
}

/// Summed money fields, used for the whole-range totals and year-to-date columns.
///
/// # Example
///
/// ```
/// use paystub_engine::models::PayTotals;
/// use rust_decimal::Decimal;
///
/// let mut totals = PayTotals::default();
/// let period = PayTotals {
///     gross_pay: Decimal::from(2000),
///     net_pay: Decimal::from(1407),
///     ..Default::default()
/// };
/// totals.accumulate(&period).unwrap();
/// totals.accumulate(&period).unwrap();
/// assert_eq!(totals.gross_pay, Decimal::from(4000));
/// assert_eq!(totals.net_pay, Decimal::from(2814));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Pay before anything is withheld.
    pub gross_pay: Decimal,
    /// Social Security (OASDI) withholding.
    pub social_security_tax: Decimal,
    /// Medicare withholding.
    pub medicare_tax: Decimal,
    /// Federal income tax withholding.
    pub federal_tax: Decimal,
    /// State income tax withholding.
    pub state_tax: Decimal,
    /// Local income tax withholding.
    pub local_tax: Decimal,
    /// Sum of the five taxes.
    pub total_tax: Decimal,
    /// Sum of deductions.
    pub total_deductions: Decimal,
    /// Sum of contributions.
    pub total_contributions: Decimal,
    /// Sum of employer-funded benefits; not part of net pay.
    pub total_employer_benefits: Decimal,
    /// Take-home pay.
    pub net_pay: Decimal,
}

impl PayTotals {
    /// Adds every field of `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] naming the first field whose
    /// sum overflows. `self` is left unchanged in that case.
    pub fn accumulate(&mut self, other: &PayTotals) -> EngineResult<()> {
        fn add(lhs: Decimal, rhs: Decimal, field: &str) -> EngineResult<Decimal> {
            lhs.checked_add(rhs)
                .ok_or_else(|| EngineError::too_large(field))
        }

        *self = PayTotals {
            gross_pay: add(self.gross_pay, other.gross_pay, "gross_pay")?,
            social_security_tax: add(
                self.social_security_tax,
                other.social_security_tax,
                "social_security_tax",
            )?,
            medicare_tax: add(self.medicare_tax, other.medicare_tax, "medicare_tax")?,
            federal_tax: add(self.federal_tax, other.federal_tax, "federal_tax")?,
            state_tax: add(self.state_tax, other.state_tax, "state_tax")?,
            local_tax: add(self.local_tax, other.local_tax, "local_tax")?,
            total_tax: add(self.total_tax, other.total_tax, "total_tax")?,
            total_deductions: add(self.total_deductions, other.total_deductions, "total_deductions")?,
            total_contributions: add(
                self.total_contributions,
                other.total_contributions,
                "total_contributions",
            )?,
            total_employer_benefits: add(
                self.total_employer_benefits,
                other.total_employer_benefits,
                "total_employer_benefits",
            )?,
            net_pay: add(self.net_pay, other.net_pay, "net_pay")?,
        };
        Ok(())
    }
}

/// The computed figures for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// The period these figures are for.
    pub period: PayPeriod,
    /// Regular hours used for hourly gross pay.
    pub hours: Decimal,
    /// Overtime hours used for hourly gross pay.
    pub overtime_hours: Decimal,
    /// Commission added to gross pay.
    pub commission: Decimal,
    /// Pay before anything is withheld.
    pub gross_pay: Decimal,
    /// Social Security (OASDI) withholding.
    pub social_security_tax: Decimal,
    /// Medicare withholding.
    pub medicare_tax: Decimal,
    /// Federal income tax withholding.
    pub federal_tax: Decimal,
    /// State income tax withholding.
    pub state_tax: Decimal,
    /// Local income tax withholding.
    pub local_tax: Decimal,
    /// Sum of the five taxes.
    pub total_tax: Decimal,
    /// Sum of deductions.
    pub total_deductions: Decimal,
    /// Sum of contributions.
    pub total_contributions: Decimal,
    /// Sum of employer-funded benefits.
    pub total_employer_benefits: Decimal,
    /// Gross pay minus taxes, deductions and contributions.
    pub net_pay: Decimal,
    /// Effective state rate (state tax over gross) for display.
    pub state_tax_rate: Decimal,
    /// Local rate applied, for display.
    pub local_tax_rate: Decimal,
    /// Individual deduction lines.
    pub deductions: Vec<LineAmount>,
    /// Individual contribution lines.
    pub contributions: Vec<LineAmount>,
    /// Individual employer benefit lines.
    pub benefits: Vec<BenefitAmount>,
    /// Running totals through this period.
    pub ytd: PayTotals,
}

impl PeriodResult {
    /// Returns this period's money fields as a [`PayTotals`].
    pub fn totals(&self) -> PayTotals {
        PayTotals {
            gross_pay: self.gross_pay,
            social_security_tax: self.social_security_tax,
            medicare_tax: self.medicare_tax,
            federal_tax: self.federal_tax,
            state_tax: self.state_tax,
            local_tax: self.local_tax,
            total_tax: self.total_tax,
            total_deductions: self.total_deductions,
            total_contributions: self.total_contributions,
            total_employer_benefits: self.total_employer_benefits,
            net_pay: self.net_pay,
        }
    }
}

/// An absence plan as printed, with its derived balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsencePlanBalance {
    /// Plan name.
    pub description: String,
    /// Hours accrued.
    pub accrued_hours: Decimal,
    /// Hours used.
    pub reduced_hours: Decimal,
    /// Accrued minus used; may be negative.
    pub available_hours: Decimal,
}

impl TryFrom<&AbsencePlanItem> for AbsencePlanBalance {
    type Error = EngineError;

    fn try_from(item: &AbsencePlanItem) -> EngineResult<Self> {
        let available_hours = item.available_hours().ok_or_else(|| {
            EngineError::invalid_configuration(
                "absence_plans",
                format!("available hours for '{}' are too large to compute", item.description),
            )
        })?;

        Ok(AbsencePlanBalance {
            description: item.description.clone(),
            accrued_hours: item.accrued_hours,
            reduced_hours: item.reduced_hours,
            available_hours,
        })
    }
}

/// The result of assembling a whole request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Every money field summed across all periods.
    pub totals: PayTotals,
    /// Per-period results in schedule order.
    pub periods: Vec<PeriodResult>,
    /// Absence plan balances.
    pub absence_plans: Vec<AbsencePlanBalance>,
}
