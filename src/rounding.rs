//! Conversion of full-precision amounts into reported cents.
//!
//! Every monetary field leaving the engine is rounded here exactly once, with
//! round-half-away-from-zero: `2.5` becomes `3` and `-2.5` becomes `-3`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{FinancingError, FinancingResult};

/// Rounds `value` to whole cents and narrows it to `i64`.
pub fn to_cents(value: Decimal, field: &'static str) -> FinancingResult<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(FinancingError::AmountOutOfRange { field })
}

/// `installment * months`, failing instead of wrapping.
pub fn total_of_installments(
    installment: i64,
    months: u32,
    field: &'static str,
) -> FinancingResult<i64> {
    installment
        .checked_mul(i64::from(months))
        .ok_or(FinancingError::AmountOutOfRange { field })
}
