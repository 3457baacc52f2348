//! The tax table lookup interface consumed by the tax engine.
//!
//! The engine does not own tax rates. It calls three pure lookups through the
//! [`TaxTables`] trait; [`TaxTableConfig`] implements them from YAML data, and
//! callers may supply any other implementation.

use rust_decimal::Decimal;

use crate::models::FilingStatus;

use super::types::{BracketSchedule, TaxTableConfig};

/// State income tax rules as seen by the tax engine.
#[derive(Debug, Clone, Copy)]
pub struct StateTaxInfo<'a> {
    /// False for states with no wage income tax.
    pub has_income_tax: bool,
    /// Whether claimed allowances reduce taxable income.
    pub uses_allowances: bool,
    /// Annual income exempted per allowance.
    pub allowance_value_per_year: Decimal,
    /// The annual bracket function.
    pub brackets: &'a BracketSchedule,
}

/// Synchronous, side-effect-free tax rate lookups.
pub trait TaxTables {
    /// Annual federal income tax on an annualized gross for a filing status,
    /// or `None` if the tables have no schedule for that status.
    fn federal_bracket_tax(
        &self,
        annualized_gross: Decimal,
        filing_status: FilingStatus,
    ) -> Option<Decimal>;

    /// State rules, or `None` if the state code is not recognised.
    fn state_tax_info(&self, state_code: &str) -> Option<StateTaxInfo<'_>>;

    /// Flat local rate for a city, or zero if the city levies none.
    fn local_tax_rate(&self, state_code: &str, city: &str) -> Decimal;
}

impl TaxTables for TaxTableConfig {
    fn federal_bracket_tax(
        &self,
        annualized_gross: Decimal,
        filing_status: FilingStatus,
    ) -> Option<Decimal> {
        self.federal_schedule(filing_status).map(|schedule| {
            let taxable = (annualized_gross - schedule.standard_deduction).max(Decimal::ZERO);
            schedule.brackets.tax_for(taxable)
        })
    }

    fn state_tax_info(&self, state_code: &str) -> Option<StateTaxInfo<'_>> {
        self.state(state_code).map(|state| StateTaxInfo {
            has_income_tax: state.has_income_tax,
            uses_allowances: state.uses_allowances,
            allowance_value_per_year: state.allowance_value_per_year,
            brackets: &state.brackets,
        })
    }

    fn local_tax_rate(&self, state_code: &str, city: &str) -> Decimal {
        self.local_rate(state_code, city).unwrap_or(Decimal::ZERO)
    }
}
