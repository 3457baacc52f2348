//! Statutory withholding for a single period.
//!
//! This module computes Social Security, Medicare, federal, state and local
//! tax for one period's gross pay. Rates for federal, state and local tax come
//! from a [`TaxTables`] implementation; the engine only annualizes, applies
//! allowances and de-annualizes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{FilingStatus, Jurisdiction, PayFrequency, WorkerType};

use super::checked;
use super::rounding::{round_currency, round_rate};

/// Employee Social Security (OASDI) rate. No wage base cap is modeled.
pub const SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(62, 0, 0, false, 3);

/// Employee Medicare rate.
pub const MEDICARE_RATE: Decimal = Decimal::from_parts(145, 0, 0, false, 4);

/// Flat federal rate applied when the worker has made no filing status election.
///
/// This is the "no-election-flat-rate" policy. Callers rely on the exact
/// figure, so it is not replaced with a bracket estimate.
pub const NO_ELECTION_FLAT_RATE: Decimal = Decimal::from_parts(22, 0, 0, false, 2);

/// How the federal figure was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FederalMethod {
    /// Contractor; nothing withheld.
    Exempt,
    /// Annualized and run through the filing status brackets.
    Brackets,
    /// No filing status; flat [`NO_ELECTION_FLAT_RATE`] of gross.
    NoElectionFlatRate,
}

/// The withholding for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Social Security withholding.
    pub social_security_tax: Decimal,
    /// Medicare withholding.
    pub medicare_tax: Decimal,
    /// Federal income tax withholding.
    pub federal_tax: Decimal,
    /// State income tax withholding.
    pub state_tax: Decimal,
    /// Local income tax withholding.
    pub local_tax: Decimal,
    /// Sum of the five components.
    pub total_tax: Decimal,
    /// State tax over gross, for display.
    pub state_tax_rate: Decimal,
    /// Local rate applied, for display.
    pub local_tax_rate: Decimal,
    /// How the federal figure was computed.
    pub federal_method: FederalMethod,
}

impl TaxBreakdown {
    /// A breakdown with every figure zero, used for contractors.
    pub fn exempt() -> Self {
        TaxBreakdown {
            social_security_tax: Decimal::ZERO,
            medicare_tax: Decimal::ZERO,
            federal_tax: Decimal::ZERO,
            state_tax: Decimal::ZERO,
            local_tax: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            state_tax_rate: Decimal::ZERO,
            local_tax_rate: Decimal::ZERO,
            federal_method: FederalMethod::Exempt,
        }
    }
}

/// Computes the withholding for one period's gross pay.
///
/// # Rules
///
/// - Contractors: every figure is zero and no table is consulted.
/// - Social Security and Medicare: flat rates on gross.
/// - Federal: with a filing status, gross is annualized, taxed through
///   [`TaxTables::federal_bracket_tax`] and divided back down. Without one,
///   [`NO_ELECTION_FLAT_RATE`] of gross.
/// - State: zero without a state or if the state levies no income tax.
///   Otherwise annualized gross, less `allowances * allowance_value_per_year`
///   for allowance-using states (floored at zero), through the state brackets.
/// - Local: `gross * rate` when local tax is included and the city has a rate.
///
/// Each component is rounded to cents before being summed.
///
/// # Errors
///
/// - [`EngineError::UnknownJurisdiction`] if a state is given that the tables
///   do not recognise
/// - [`EngineError::InvalidConfiguration`] if a filing status is given that
///   the tables have no schedule for, or if the annualized gross is too large
///   to represent
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::compute_taxes;
/// use paystub_engine::config::ConfigLoader;
/// use paystub_engine::models::{Jurisdiction, PayFrequency, WorkerType};
/// use rust_decimal::Decimal;
///
/// # let tables = ConfigLoader::load("./config/us_2025").unwrap();
/// let taxes = compute_taxes(
///     Decimal::from(2000),
///     WorkerType::Employee,
///     &Jurisdiction::default(),
///     None,
///     0,
///     PayFrequency::Biweekly,
///     &tables,
/// ).unwrap();
///
/// assert_eq!(taxes.social_security_tax, Decimal::from(124));
/// assert_eq!(taxes.medicare_tax, Decimal::from(29));
/// assert_eq!(taxes.federal_tax, Decimal::from(440));
/// ```
pub fn compute_taxes(
    gross_pay: Decimal,
    worker_type: WorkerType,
    jurisdiction: &Jurisdiction,
    federal_filing_status: Option<FilingStatus>,
    state_allowance_count: u32,
    pay_frequency: PayFrequency,
    tables: &dyn TaxTables,
) -> EngineResult<TaxBreakdown> {
    if worker_type == WorkerType::Contractor {
        return Ok(TaxBreakdown::exempt());
    }

    let periods_per_year = Decimal::from(pay_frequency.periods_per_year());
    let annualized_gross = checked::mul(gross_pay, periods_per_year, "annualized_gross")?;

    let social_security_tax = round_currency(gross_pay * SOCIAL_SECURITY_RATE);
    let medicare_tax = round_currency(gross_pay * MEDICARE_RATE);

    let (federal_tax, federal_method) = match federal_filing_status {
        Some(status) => {
            let annual_tax = tables
                .federal_bracket_tax(annualized_gross, status)
                .ok_or_else(|| {
                    EngineError::invalid_configuration(
                        "federal_filing_status",
                        format!("no federal schedule is loaded for '{}'", status),
                    )
                })?;
            (
                round_currency(annual_tax / periods_per_year),
                FederalMethod::Brackets,
            )
        }
        None => (
            round_currency(gross_pay * NO_ELECTION_FLAT_RATE),
            FederalMethod::NoElectionFlatRate,
        ),
    };

    let state_code = jurisdiction
        .state
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty());

    let state_tax = match state_code {
        Some(code) => {
            let info = tables
                .state_tax_info(code)
                .ok_or_else(|| EngineError::UnknownJurisdiction {
                    state: code.to_string(),
                })?;

            if info.has_income_tax {
                let mut taxable = annualized_gross;
                if info.uses_allowances {
                    let allowances = checked::mul(
                        Decimal::from(state_allowance_count),
                        info.allowance_value_per_year,
                        "state_allowance_count",
                    )?;
                    taxable = checked::sub(taxable, allowances, "state_allowance_count")?;
                }
                let annual_tax = info.brackets.tax_for(taxable.max(Decimal::ZERO));
                round_currency(annual_tax / periods_per_year)
            } else {
                Decimal::ZERO
            }
        }
        None => Decimal::ZERO,
    };

    let local_tax_rate = match (state_code, jurisdiction.city.as_deref()) {
        (Some(code), Some(city)) if jurisdiction.include_local_tax => {
            tables.local_tax_rate(code, city)
        }
        _ => Decimal::ZERO,
    };
    let local_tax = round_currency(checked::mul(gross_pay, local_tax_rate, "local_tax")?);

    let state_tax_rate = if gross_pay > Decimal::ZERO {
        round_rate(state_tax / gross_pay)
    } else {
        Decimal::ZERO
    };

    let total_tax = checked::sum(
        [social_security_tax, medicare_tax, federal_tax, state_tax, local_tax],
        "total_tax",
    )?;

    debug!(
        gross_pay = %gross_pay,
        federal_method = ?federal_method,
        federal_tax = %federal_tax,
        state = state_code.unwrap_or("-"),
        state_tax = %state_tax,
        local_tax = %local_tax,
        total_tax = %total_tax,
        "Computed period taxes"
    );

    Ok(TaxBreakdown {
        social_security_tax,
        medicare_tax,
        federal_tax,
        state_tax,
        local_tax,
        total_tax,
        state_tax_rate,
        local_tax_rate,
        federal_method,
    })
}
