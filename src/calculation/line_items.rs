//! Deduction, contribution and employer benefit aggregation.
//!
//! This module resolves each caller-configured line item against a period's
//! gross pay and totals the buckets. Deductions and contributions reduce net
//! pay; employer benefits are reported alongside it and never do.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BenefitAmount, BenefitType, ContributionItem, ContributionType, DeductionItem, DeductionType,
    EmployerBenefitItem, LineAmount, LineItem, LineItemCatalog, WorkerType,
};

use super::checked;
use super::rounding::round_currency;

/// The resolved line items for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateLineItems {
    /// Resolved deductions in input order.
    pub deductions: Vec<LineAmount>,
    /// Resolved contributions in input order.
    pub contributions: Vec<LineAmount>,
    /// Resolved employer benefits in input order.
    pub benefits: Vec<BenefitAmount>,
    /// Sum of deductions.
    pub total_deductions: Decimal,
    /// Sum of contributions.
    pub total_contributions: Decimal,
    /// Sum of employer benefits.
    pub total_employer_benefits: Decimal,
}

/// Resolves and totals a period's line items.
///
/// Each item resolves to `gross * amount / 100` when it is a percentage of
/// gross, otherwise to `amount`, rounded to cents.
///
/// Contractors carry no deductions or contributions: both lists are ignored
/// without being validated. Employer benefits are still resolved.
///
/// A `401k_match` benefit is based on the first `401k` or `roth_401k`
/// contribution: `min(contribution, gross * cap% ) * match%`. Without such a
/// contribution the match is zero.
///
/// The pre-tax flag is recorded on each line but does not change the tax base.
///
/// # Errors
///
/// Returns [`EngineError::MalformedLineItem`] for a type outside the bucket's
/// catalog, a negative amount, an amount too large to resolve against gross,
/// or a `401k_match` with missing or negative match parameters.
/// Returns [`EngineError::InvalidConfiguration`] if a bucket total is too
/// large to represent.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::aggregate_line_items;
/// use paystub_engine::models::{EmployerBenefitItem, LineItem, WorkerType};
/// use rust_decimal::Decimal;
///
/// let contributions = vec![LineItem {
///     item_type: "401k".to_string(),
///     name: "401(k)".to_string(),
///     amount: Decimal::from(1000),
///     is_percentage_of_gross: false,
///     is_pre_tax: None,
/// }];
/// let benefits = vec![EmployerBenefitItem {
///     item_type: "401k_match".to_string(),
///     name: "Employer match".to_string(),
///     amount: Decimal::ZERO,
///     is_percentage_of_gross: false,
///     match_percent: Some(Decimal::from(50)),
///     match_up_to_percent_of_gross: Some(Decimal::from(6)),
/// }];
///
/// let items = aggregate_line_items(
///     Decimal::from(10000),
///     &[],
///     &contributions,
///     &benefits,
///     WorkerType::Employee,
/// ).unwrap();
///
/// // min(1000, 600) * 50%
/// assert_eq!(items.benefits[0].amount, Decimal::from(300));
/// ```
pub fn aggregate_line_items(
    gross_pay: Decimal,
    deductions: &[DeductionItem],
    contributions: &[ContributionItem],
    benefits: &[EmployerBenefitItem],
    worker_type: WorkerType,
) -> EngineResult<AggregateLineItems> {
    let (deductions, contributions) = match worker_type {
        WorkerType::Employee => (
            resolve_items::<DeductionType>(gross_pay, deductions)?,
            resolve_items::<ContributionType>(gross_pay, contributions)?,
        ),
        WorkerType::Contractor => (Vec::new(), Vec::new()),
    };

    let matchable_contribution = contributions
        .iter()
        .find(|(kind, _)| kind.is_401k())
        .map(|(_, line)| line.amount);

    let benefits = benefits
        .iter()
        .map(|benefit| resolve_benefit(gross_pay, benefit, matchable_contribution))
        .collect::<EngineResult<Vec<_>>>()?;

    let deductions: Vec<LineAmount> = deductions.into_iter().map(|(_, line)| line).collect();
    let contributions: Vec<LineAmount> = contributions.into_iter().map(|(_, line)| line).collect();

    let total_deductions =
        checked::sum(deductions.iter().map(|line| line.amount), "total_deductions")?;
    let total_contributions =
        checked::sum(contributions.iter().map(|line| line.amount), "total_contributions")?;
    let total_employer_benefits =
        checked::sum(benefits.iter().map(|line| line.amount), "total_employer_benefits")?;

    Ok(AggregateLineItems {
        deductions,
        contributions,
        benefits,
        total_deductions,
        total_contributions,
        total_employer_benefits,
    })
}

fn resolve_items<C: LineItemCatalog>(
    gross_pay: Decimal,
    items: &[LineItem],
) -> EngineResult<Vec<(C, LineAmount)>> {
    items
        .iter()
        .map(|item| {
            let kind = C::parse(&item.item_type).ok_or_else(|| {
                EngineError::malformed_line_item(
                    &item.name,
                    format!("unknown {} type '{}'", C::BUCKET, item.item_type),
                )
            })?;
            ensure_non_negative(&item.name, "amount", item.amount)?;
            let amount = item
                .resolve_amount(gross_pay)
                .ok_or_else(|| amount_too_large(&item.name))?;

            let is_pre_tax = if kind.is_other() {
                item.is_pre_tax.unwrap_or(false)
            } else {
                kind.default_pre_tax()
            };

            Ok((
                kind,
                LineAmount {
                    item_type: item.item_type.clone(),
                    name: item.name.clone(),
                    is_pre_tax,
                    amount: round_currency(amount),
                },
            ))
        })
        .collect()
}

fn resolve_benefit(
    gross_pay: Decimal,
    benefit: &EmployerBenefitItem,
    matchable_contribution: Option<Decimal>,
) -> EngineResult<BenefitAmount> {
    let kind = BenefitType::parse(&benefit.item_type).ok_or_else(|| {
        EngineError::malformed_line_item(
            &benefit.name,
            format!("unknown benefit type '{}'", benefit.item_type),
        )
    })?;

    let amount = match kind {
        BenefitType::Match401k => {
            let match_percent = required_match_field(benefit, "match_percent", benefit.match_percent)?;
            let match_cap = required_match_field(
                benefit,
                "match_up_to_percent_of_gross",
                benefit.match_up_to_percent_of_gross,
            )?;

            match matchable_contribution {
                Some(employee_contribution) => {
                    let max_matchable = gross_pay
                        .checked_mul(match_cap)
                        .ok_or_else(|| amount_too_large(&benefit.name))?
                        / Decimal::ONE_HUNDRED;
                    let matchable = employee_contribution.min(max_matchable);
                    let matched = matchable
                        .checked_mul(match_percent)
                        .ok_or_else(|| amount_too_large(&benefit.name))?;
                    round_currency(matched / Decimal::ONE_HUNDRED)
                }
                None => Decimal::ZERO,
            }
        }
        _ => {
            ensure_non_negative(&benefit.name, "amount", benefit.amount)?;
            let amount = benefit
                .resolve_amount(gross_pay)
                .ok_or_else(|| amount_too_large(&benefit.name))?;
            round_currency(amount)
        }
    };

    Ok(BenefitAmount {
        item_type: benefit.item_type.clone(),
        name: benefit.name.clone(),
        amount,
    })
}

fn required_match_field(
    benefit: &EmployerBenefitItem,
    field: &str,
    value: Option<Decimal>,
) -> EngineResult<Decimal> {
    let value = value.ok_or_else(|| {
        EngineError::malformed_line_item(&benefit.name, format!("{} is required", field))
    })?;
    ensure_non_negative(&benefit.name, field, value)?;
    Ok(value)
}

fn amount_too_large(name: &str) -> EngineError {
    EngineError::malformed_line_item(name, "amount is too large to compute")
}

fn ensure_non_negative(name: &str, field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::malformed_line_item(
            name,
            format!("{} must not be negative (got {})", field, value),
        ));
    }
    Ok(())
}
