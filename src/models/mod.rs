//! Core data models for the pay stub engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod line_item;
mod pay_period;
mod request;

pub use calculation_result::{
    AbsencePlanBalance, AggregateResult, BenefitAmount, LineAmount, PayTotals, PeriodResult,
};
pub use line_item::{
    AbsencePlanItem, BenefitType, ContributionItem, ContributionType, DeductionItem,
    DeductionType, EmployerBenefitItem, LineItem, LineItemCatalog,
};
pub use pay_period::PayPeriod;
pub use request::{
    FilingStatus, Jurisdiction, PayFrequency, PayType, PayrollRequest, PeriodOverride,
    WorkerType,
};
