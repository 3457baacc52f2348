//! Calculation logic for the pay stub engine.
//!
//! This module contains the pure calculation functions: pay period scheduling,
//! per-period gross pay, tax withholding, deduction/contribution/benefit
//! aggregation, and the assembler that runs them across a whole request.

mod assembler;
mod checked;
mod gross_pay;
mod line_items;
mod rounding;
mod scheduler;
mod tax;

pub use assembler::{assemble, expected_net_pay};
pub use gross_pay::{GrossPayResult, OVERTIME_MULTIPLIER, calculate_gross_pay};
pub use line_items::{AggregateLineItems, aggregate_line_items};
pub use rounding::{CURRENCY_DP, RATE_DP, round_currency, round_rate};
pub use scheduler::{MAX_PERIODS, next_pay_date, schedule_periods};
pub use tax::{
    FederalMethod, MEDICARE_RATE, NO_ELECTION_FLAT_RATE, SOCIAL_SECURITY_RATE, TaxBreakdown,
    compute_taxes,
};
