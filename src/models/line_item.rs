//! Deduction, contribution, employer benefit and absence plan models.
//!
//! Line items arrive with a free-form `type` string. Each bucket has its own
//! catalog of recognised types; anything outside the catalog must be sent as
//! `"other"`. Catalog lookups happen in the aggregator so that an unknown type
//! surfaces as a structured error rather than a deserialization failure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog of recognised line item types for one bucket.
pub trait LineItemCatalog: Sized + Copy {
    /// Human-readable bucket name used in error messages.
    const BUCKET: &'static str;

    /// Parses a wire type string, returning `None` if it is not in the catalog.
    fn parse(value: &str) -> Option<Self>;

    /// Returns true for the catch-all `other` entry.
    fn is_other(&self) -> bool;

    /// Returns whether the catalog treats this type as pre-tax.
    fn default_pre_tax(&self) -> bool;
}

/// Recognised deduction types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionType {
    /// Employee share of medical premiums.
    HealthInsurance,
    /// Employee share of dental premiums.
    DentalInsurance,
    /// Employee share of vision premiums.
    VisionInsurance,
    /// Supplemental life insurance.
    LifeInsurance,
    /// Disability insurance.
    DisabilityInsurance,
    /// Court-ordered wage garnishment.
    Garnishment,
    /// Child support order.
    ChildSupport,
    /// Union dues.
    UnionDues,
    /// Repayment of an employer loan or advance.
    LoanRepayment,
    /// Anything else.
    Other,
}

impl LineItemCatalog for DeductionType {
    const BUCKET: &'static str = "deduction";

    fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "health_insurance" => DeductionType::HealthInsurance,
            "dental_insurance" => DeductionType::DentalInsurance,
            "vision_insurance" => DeductionType::VisionInsurance,
            "life_insurance" => DeductionType::LifeInsurance,
            "disability_insurance" => DeductionType::DisabilityInsurance,
            "garnishment" => DeductionType::Garnishment,
            "child_support" => DeductionType::ChildSupport,
            "union_dues" => DeductionType::UnionDues,
            "loan_repayment" => DeductionType::LoanRepayment,
            "other" => DeductionType::Other,
            _ => return None,
        })
    }

    fn is_other(&self) -> bool {
        *self == DeductionType::Other
    }

    fn default_pre_tax(&self) -> bool {
        matches!(
            self,
            DeductionType::HealthInsurance
                | DeductionType::DentalInsurance
                | DeductionType::VisionInsurance
        )
    }
}

/// Recognised contribution types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionType {
    /// Traditional 401(k).
    Traditional401k,
    /// Roth 401(k).
    Roth401k,
    /// 403(b) plan.
    Plan403b,
    /// 457(b) plan.
    Plan457b,
    /// Health savings account.
    Hsa,
    /// Flexible spending account.
    Fsa,
    /// Dependent care FSA.
    DependentCareFsa,
    /// Roth IRA via payroll deduction.
    RothIra,
    /// Anything else.
    Other,
}

impl ContributionType {
    /// Returns true for the plan types an employer 401(k) match is based on.
    pub fn is_401k(&self) -> bool {
        matches!(
            self,
            ContributionType::Traditional401k | ContributionType::Roth401k
        )
    }
}

impl LineItemCatalog for ContributionType {
    const BUCKET: &'static str = "contribution";

    fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "401k" => ContributionType::Traditional401k,
            "roth_401k" => ContributionType::Roth401k,
            "403b" => ContributionType::Plan403b,
            "457b" => ContributionType::Plan457b,
            "hsa" => ContributionType::Hsa,
            "fsa" => ContributionType::Fsa,
            "dependent_care_fsa" => ContributionType::DependentCareFsa,
            "roth_ira" => ContributionType::RothIra,
            "other" => ContributionType::Other,
            _ => return None,
        })
    }

    fn is_other(&self) -> bool {
        *self == ContributionType::Other
    }

    fn default_pre_tax(&self) -> bool {
        !matches!(
            self,
            ContributionType::Roth401k | ContributionType::RothIra | ContributionType::Other
        )
    }
}

/// Recognised employer benefit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitType {
    /// Employer match on the employee's 401(k) or Roth 401(k).
    Match401k,
    /// Employer share of medical premiums.
    HealthInsurance,
    /// Employer HSA funding.
    Hsa,
    /// Employer-paid life insurance.
    LifeInsurance,
    /// Anything else.
    Other,
}

impl BenefitType {
    /// Parses a wire type string, returning `None` if it is not in the catalog.
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "401k_match" => BenefitType::Match401k,
            "health_insurance" => BenefitType::HealthInsurance,
            "hsa" => BenefitType::Hsa,
            "life_insurance" => BenefitType::LifeInsurance,
            "other" => BenefitType::Other,
            _ => return None,
        })
    }
}

/// A deduction or contribution as configured by the caller.
///
/// Deductions and contributions share this shape; they differ only in the
/// catalog their `item_type` is checked against and the total they roll into.
///
/// # Example
///
/// ```
/// use paystub_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let item = LineItem {
///     item_type: "401k".to_string(),
///     name: "Retirement".to_string(),
///     amount: Decimal::from(5),
///     is_percentage_of_gross: true,
///     is_pre_tax: None,
/// };
/// assert_eq!(item.resolve_amount(Decimal::from(2000)), Some(Decimal::from(100)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog type (e.g., "health_insurance", "401k", "other").
    #[serde(rename = "type")]
    pub item_type: String,
    /// Display name printed on the stub.
    pub name: String,
    /// Flat dollars, or a percentage of gross when `is_percentage_of_gross` is set.
    pub amount: Decimal,
    /// Interpret `amount` as a percentage of gross pay.
    #[serde(default)]
    pub is_percentage_of_gross: bool,
    /// Pre-tax flag; only honoured for `other` items.
    #[serde(default)]
    pub is_pre_tax: Option<bool>,
}

impl LineItem {
    /// Resolves the item to dollars for a given gross pay, before rounding.
    ///
    /// Returns `None` if a percentage of gross overflows.
    pub fn resolve_amount(&self, gross_pay: Decimal) -> Option<Decimal> {
        resolve(self.amount, self.is_percentage_of_gross, gross_pay)
    }
}

/// A withholdable obligation.
pub type DeductionItem = LineItem;

/// A voluntary savings contribution.
pub type ContributionItem = LineItem;

/// An employer-funded benefit. Never reduces the employee's net pay.
///
/// For `401k_match`, `match_percent` and `match_up_to_percent_of_gross` are used
/// instead of `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerBenefitItem {
    /// Catalog type (e.g., "401k_match", "health_insurance", "other").
    #[serde(rename = "type")]
    pub item_type: String,
    /// Display name printed on the stub.
    pub name: String,
    /// Flat dollars, or a percentage of gross when `is_percentage_of_gross` is set.
    #[serde(default)]
    pub amount: Decimal,
    /// Interpret `amount` as a percentage of gross pay.
    #[serde(default)]
    pub is_percentage_of_gross: bool,
    /// Percentage of the matchable employee contribution the employer pays.
    #[serde(default)]
    pub match_percent: Option<Decimal>,
    /// Cap on the matchable contribution, as a percentage of gross.
    #[serde(default)]
    pub match_up_to_percent_of_gross: Option<Decimal>,
}

impl EmployerBenefitItem {
    /// Resolves a non-match benefit to dollars for a given gross pay, before
    /// rounding, or `None` if a percentage of gross overflows.
    pub fn resolve_amount(&self, gross_pay: Decimal) -> Option<Decimal> {
        resolve(self.amount, self.is_percentage_of_gross, gross_pay)
    }
}

/// A paid leave balance printed on the stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsencePlanItem {
    /// Plan name (e.g., "Vacation").
    pub description: String,
    /// Hours accrued.
    pub accrued_hours: Decimal,
    /// Hours used.
    pub reduced_hours: Decimal,
}

impl AbsencePlanItem {
    /// Returns accrued minus used hours. Not clamped; an overdrawn plan is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use paystub_engine::models::AbsencePlanItem;
    /// use rust_decimal::Decimal;
    ///
    /// let plan = AbsencePlanItem {
    ///     description: "Sick".to_string(),
    ///     accrued_hours: Decimal::from(8),
    ///     reduced_hours: Decimal::from(12),
    /// };
    /// assert_eq!(plan.available_hours(), Some(Decimal::from(-4)));
    /// ```
    pub fn available_hours(&self) -> Option<Decimal> {
        self.accrued_hours.checked_sub(self.reduced_hours)
    }
}

fn resolve(amount: Decimal, is_percentage_of_gross: bool, gross_pay: Decimal) -> Option<Decimal> {
    if is_percentage_of_gross {
        gross_pay
            .checked_mul(amount)
            .map(|share| share / Decimal::ONE_HUNDRED)
    } else {
        Some(amount)
    }
}
