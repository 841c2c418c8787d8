//! Annual to monthly effective rate conversion.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::{FinancingError, FinancingResult};

const MAX_ITERATIONS: usize = 64;

/// Newton stops once a step moves the root by less than 1e-26.
const ROOT_TOLERANCE: Decimal = dec!(0.00000000000000000000000001);

/// Checks that an annual rate is not negative.
pub fn check_annual_rate(annual_rate: Decimal) -> FinancingResult<()> {
    if annual_rate < Decimal::ZERO {
        return Err(FinancingError::InvalidRate(annual_rate));
    }
    Ok(())
}

/// Converts an annual effective rate into its equivalent monthly effective rate.
///
/// The result satisfies `(1 + monthly)^12 = 1 + annual`, i.e. compound
/// conversion, not `annual / 12`. Both rates are fractions (0.08 = 8%).
///
/// The twelfth root is found with Newton's method on `x^12 = 1 + annual`,
/// seeded with `exp(ln(1 + annual) / 12)`. After the first step every
/// iterate sits at or above the root (AM-GM), so the iteration decreases
/// monotonically onto it. Starting this close to the root keeps `x^11`
/// within `Decimal` range for any rate whose `1 + annual` is representable.
///
/// # Errors
///
/// Returns [`FinancingError::InvalidRate`] for negative rates and
/// [`FinancingError::AmountOutOfRange`] when `1 + annual` itself does not
/// fit in a `Decimal`.
pub fn monthly_rate_from_annual(annual_rate: Decimal) -> FinancingResult<Decimal> {
    check_annual_rate(annual_rate)?;
    if annual_rate.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let out_of_range = FinancingError::AmountOutOfRange { field: "annual_interest_rate" };
    let twelve = dec!(12);
    let eleven = dec!(11);
    let target = Decimal::ONE.checked_add(annual_rate).ok_or_else(|| out_of_range.clone())?;

    let mut root = target
        .checked_ln()
        .and_then(|ln| (ln / twelve).checked_exp())
        .unwrap_or(Decimal::ONE + annual_rate / twelve);
    for _ in 0..MAX_ITERATIONS {
        let power = root.checked_powu(11).ok_or_else(|| out_of_range.clone())?;
        let next = (eleven * root + target / power) / twelve;
        let step = (next - root).abs();
        root = next;
        if step <= ROOT_TOLERANCE {
            break;
        }
    }

    Ok(root - Decimal::ONE)
}

/// Compounds a monthly effective rate back into its annual effective rate.
pub fn annual_rate_from_monthly(monthly_rate: Decimal) -> Decimal {
    (Decimal::ONE + monthly_rate).powu(12) - Decimal::ONE
}

/// Turns a percentage as typed in a form (`8` for 8%) into a fraction.
pub fn annual_rate_from_percent(percent: Decimal) -> Decimal {
    percent / dec!(100)
}
