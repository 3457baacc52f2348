//! Pay stub assembly.
//!
//! Drives the scheduler, gross pay, tax and line item calculations for every
//! period in a request and folds the results into running and overall totals.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxTables;
use crate::error::EngineResult;
use crate::models::{AbsencePlanBalance, AggregateResult, PayTotals, PayrollRequest, PeriodResult};

use super::checked;
use super::gross_pay::calculate_gross_pay;
use super::line_items::aggregate_line_items;
use super::scheduler::schedule_periods;
use super::tax::compute_taxes;

/// Computes every period of a payroll request and the totals across them.
///
/// For each scheduled period:
///
/// 1. Gross pay from the pay type and any override for the period index
/// 2. Taxes on the gross
/// 3. Deductions, contributions and employer benefits on the gross
/// 4. `net = gross - total_tax - total_deductions - total_contributions`
///
/// Every component is rounded to cents before it is summed, so the net
/// identity holds exactly on the returned figures. The result depends only on
/// `request` and `tables`.
///
/// # Errors
///
/// The first error raised by any stage is returned and no partial result is
/// produced.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::assemble;
/// use paystub_engine::config::ConfigLoader;
/// use paystub_engine::models::PayrollRequest;
/// use rust_decimal::Decimal;
///
/// let tables = ConfigLoader::load("./config/us_2025").unwrap();
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
/// let result = assemble(&request, &tables).unwrap();
/// assert_eq!(result.periods.len(), 1);
/// assert_eq!(result.totals.net_pay, Decimal::from(1407));
/// ```
pub fn assemble(request: &PayrollRequest, tables: &dyn TaxTables) -> EngineResult<AggregateResult> {
    let pay_frequency = request.frequency()?;
    let periods = schedule_periods(
        request.generation_start,
        request.generation_end,
        pay_frequency,
        request.pay_day_of_week,
        &request.overrides,
    )?;

    let mut ytd = PayTotals::default();
    let mut results = Vec::with_capacity(periods.len());

    for period in periods {
        let gross = calculate_gross_pay(request, pay_frequency, request.override_for(period.index))?;

        let taxes = compute_taxes(
            gross.gross_pay,
            request.worker_type,
            &request.jurisdiction,
            request.federal_filing_status,
            request.state_allowance_count,
            pay_frequency,
            tables,
        )?;

        let items = aggregate_line_items(
            gross.gross_pay,
            &request.deductions,
            &request.contributions,
            &request.benefits,
            request.worker_type,
        )?;

        let withheld = checked::sum(
            [taxes.total_tax, items.total_deductions, items.total_contributions],
            "net_pay",
        )?;
        let net_pay = checked::sub(gross.gross_pay, withheld, "net_pay")?;

        debug!(
            index = period.index,
            gross_pay = %gross.gross_pay,
            total_tax = %taxes.total_tax,
            total_deductions = %items.total_deductions,
            total_contributions = %items.total_contributions,
            net_pay = %net_pay,
            "Assembled pay period"
        );

        let mut result = PeriodResult {
            period,
            hours: gross.hours,
            overtime_hours: gross.overtime_hours,
            commission: gross.commission,
            gross_pay: gross.gross_pay,
            social_security_tax: taxes.social_security_tax,
            medicare_tax: taxes.medicare_tax,
            federal_tax: taxes.federal_tax,
            state_tax: taxes.state_tax,
            local_tax: taxes.local_tax,
            total_tax: taxes.total_tax,
            total_deductions: items.total_deductions,
            total_contributions: items.total_contributions,
            total_employer_benefits: items.total_employer_benefits,
            net_pay,
            state_tax_rate: taxes.state_tax_rate,
            local_tax_rate: taxes.local_tax_rate,
            deductions: items.deductions,
            contributions: items.contributions,
            benefits: items.benefits,
            ytd: PayTotals::default(),
        };

        ytd.accumulate(&result.totals())?;
        result.ytd = ytd.clone();
        results.push(result);
    }

    Ok(AggregateResult {
        totals: ytd,
        periods: results,
        absence_plans: request
            .absence_plans
            .iter()
            .map(AbsencePlanBalance::try_from)
            .collect::<EngineResult<Vec<_>>>()?,
    })
}

/// Returns `gross - total_tax - total_deductions - total_contributions` for a period.
pub fn expected_net_pay(period: &PeriodResult) -> Decimal {
    period.gross_pay - period.total_tax - period.total_deductions - period.total_contributions
}
