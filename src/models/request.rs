//! Payroll request model and related enums.
//!
//! This module defines the immutable input bundle for one pay stub calculation:
//! who is being paid and how, the range to cover, the tax jurisdiction and
//! elections, per-period overrides and the caller-configured line items.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AbsencePlanItem, ContributionItem, DeductionItem, EmployerBenefitItem};

/// The classification of the worker being paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerType {
    /// A W-2 style employee subject to withholding.
    Employee,
    /// An independent contractor; nothing is withheld.
    Contractor,
}

/// How gross pay is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Paid per hour worked, with overtime at time and a half.
    Hourly,
    /// Paid an annual salary spread evenly across periods.
    Salary,
}

/// How often the worker is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Biweekly,
}

impl PayFrequency {
    /// Returns the number of days in one period.
    pub fn period_length_days(&self) -> i64 {
        match self {
            PayFrequency::Weekly => 7,
            PayFrequency::Biweekly => 14,
        }
    }

    /// Returns the number of periods in a year, used to annualize and to split salaries.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::Biweekly => 26,
        }
    }

    /// Returns the regular hours assumed for a period when no override is given.
    ///
    /// # Example
    ///
    /// ```
    /// use paystub_engine::models::PayFrequency;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayFrequency::Biweekly.default_hours(), Decimal::from(80));
    /// assert_eq!(PayFrequency::Weekly.default_hours(), Decimal::from(40));
    /// ```
    pub fn default_hours(&self) -> Decimal {
        match self {
            PayFrequency::Weekly => Decimal::from(40),
            PayFrequency::Biweekly => Decimal::from(80),
        }
    }
}

/// Federal filing status election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Single or married filing separately.
    Single,
    /// Married filing jointly.
    MarriedJointly,
    /// Head of household.
    HeadOfHousehold,
}

impl FilingStatus {
    /// Every filing status a federal table must cover.
    pub const ALL: [FilingStatus; 3] = [
        FilingStatus::Single,
        FilingStatus::MarriedJointly,
        FilingStatus::HeadOfHousehold,
    ];
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilingStatus::Single => write!(f, "single"),
            FilingStatus::MarriedJointly => write!(f, "married_jointly"),
            FilingStatus::HeadOfHousehold => write!(f, "head_of_household"),
        }
    }
}

/// Where the work is taxed.
///
/// A missing `state` means no state or local tax is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Two-letter state code (e.g., "CA").
    #[serde(default)]
    pub state: Option<String>,
    /// City name used for the local tax lookup.
    #[serde(default)]
    pub city: Option<String>,
    /// Whether local tax should be withheld at all.
    #[serde(default)]
    pub include_local_tax: bool,
}

/// Caller-supplied replacements for one scheduled period.
///
/// Any field left as `None` falls back to the scheduler's dates or the
/// frequency defaults (80 hours biweekly, 40 weekly, no overtime, no commission).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodOverride {
    /// The zero-based period index this override applies to.
    pub index: usize,
    /// Regular hours worked.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Commission earned in the period.
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// Replacement start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Replacement end date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Replacement pay date.
    #[serde(default)]
    pub pay_date: Option<NaiveDate>,
}

/// The complete input for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Employee or contractor.
    pub worker_type: WorkerType,
    /// Hourly or salary.
    pub pay_type: PayType,
    /// Hourly rate, required for hourly pay.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Annual salary, required for salary pay.
    #[serde(default)]
    pub annual_salary: Option<Decimal>,
    /// Pay frequency. Absence is reported as an invalid configuration.
    #[serde(default)]
    pub pay_frequency: Option<PayFrequency>,
    /// Weekday on which wages are paid.
    pub pay_day_of_week: Weekday,
    /// First day to cover (inclusive).
    pub generation_start: NaiveDate,
    /// Last day to cover (inclusive).
    pub generation_end: NaiveDate,
    /// Tax jurisdiction.
    #[serde(default)]
    pub jurisdiction: Jurisdiction,
    /// Federal filing status; absent selects the flat-rate fallback.
    #[serde(default)]
    pub federal_filing_status: Option<FilingStatus>,
    /// State allowances claimed.
    #[serde(default)]
    pub state_allowance_count: u32,
    /// Per-period overrides.
    #[serde(default)]
    pub overrides: Vec<PeriodOverride>,
    /// Withholdable obligations.
    #[serde(default)]
    pub deductions: Vec<DeductionItem>,
    /// Voluntary savings contributions.
    #[serde(default)]
    pub contributions: Vec<ContributionItem>,
    /// Employer-paid benefits.
    #[serde(default)]
    pub benefits: Vec<EmployerBenefitItem>,
    /// Paid leave balances shown on the stub.
    #[serde(default)]
    pub absence_plans: Vec<AbsencePlanItem>,
}

impl PayrollRequest {
    /// Returns the pay frequency or an invalid configuration error when it is missing.
    pub fn frequency(&self) -> EngineResult<PayFrequency> {
        self.pay_frequency
            .ok_or_else(|| EngineError::invalid_configuration("pay_frequency", "is required"))
    }

    /// Returns the override registered for a period index, if any.
    ///
    /// When several overrides name the same index the last one wins.
    pub fn override_for(&self, index: usize) -> Option<&PeriodOverride> {
        self.overrides.iter().rev().find(|o| o.index == index)
    }

    /// Returns true if the worker is a contractor.
    pub fn is_contractor(&self) -> bool {
        self.worker_type == WorkerType::Contractor
    }
}
