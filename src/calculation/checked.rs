//! Overflow-checked arithmetic on input-derived amounts.
//!
//! Caller-supplied rates, salaries and line items can be large enough that a
//! plain `Decimal` operator would panic. These helpers return
//! [`EngineError::InvalidConfiguration`] naming the quantity instead.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

pub(crate) fn mul(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::too_large(quantity))
}

pub(crate) fn add(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| EngineError::too_large(quantity))
}

pub(crate) fn sub(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| EngineError::too_large(quantity))
}

pub(crate) fn sum<I>(values: I, quantity: &str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| add(total, value, quantity))
}
