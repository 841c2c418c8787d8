//! Price table (Sistema Francês de Amortização).
//!
//! Every installment has the same nominal value; the split between interest
//! and principal shifts over the term.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{FinancingError, FinancingResult};
use crate::rounding::{to_cents, total_of_installments};
use crate::types::CalculationResult;

/// The annuity factor `i(1 + i)^n / ((1 + i)^n - 1)`.
///
/// Returns `None` when the rate is zero or too small for `(1 + i)^n` to move
/// away from one at `Decimal` precision; the caller then splits the principal
/// evenly. When `(1 + i)^n` is beyond `Decimal` range the factor has already
/// converged to `i`.
fn annuity_factor(monthly_interest_rate: Decimal, total_months: u32) -> Option<Decimal> {
    if monthly_interest_rate.is_zero() {
        return None;
    }

    match (Decimal::ONE + monthly_interest_rate).checked_powu(u64::from(total_months)) {
        None => Some(monthly_interest_rate),
        Some(growth) if growth > Decimal::ONE => Some(
            monthly_interest_rate
                .checked_mul(growth)
                .and_then(|numerator| numerator.checked_div(growth - Decimal::ONE))
                .unwrap_or(monthly_interest_rate),
        ),
        Some(_) => None,
    }
}

/// Computes the Price table summary.
///
/// The Price table formula is: PMT = P * [i(1 + i)^n] / [(1 + i)^n – 1]
///
/// The installment is rounded once and repeated for every month, so
/// `total_paid` is exactly `installment * total_months`. The rounding
/// remainder is not pushed into the last installment.
///
/// Because the installment is rounded before it is multiplied out, a
/// positive rate does not guarantee `total_paid >= financed_amount`. When
/// the exact installment is below half a cent (one cent over 360 months at
/// 8% a year, say) it rounds to zero, `total_paid` is 0 and
/// `total_interest` is negative. Callers that finance amounts that small
/// should check `total_interest` before using the result.
///
/// Expects validated arguments: `financed_amount > 0`, `total_months >= 1`.
pub(crate) fn price_schedule(
    financed_amount: i64,
    monthly_interest_rate: Decimal,
    total_months: u32,
) -> FinancingResult<CalculationResult> {
    let total_amount = Decimal::from(financed_amount);

    let Some(factor) = annuity_factor(monthly_interest_rate, total_months) else {
        // Without interest the formula degenerates to 0/0.
        let fixed_payment = to_cents(total_amount / Decimal::from(total_months), "installment")?;
        return Ok(CalculationResult {
            first_installment: fixed_payment,
            last_installment: fixed_payment,
            total_paid: total_of_installments(fixed_payment, total_months, "total_paid")?,
            total_interest: 0,
        });
    };

    let fixed_payment = total_amount
        .checked_mul(factor)
        .ok_or(FinancingError::AmountOutOfRange { field: "installment" })?;
    let fixed_payment = to_cents(fixed_payment, "installment")?;
    let total_paid = total_of_installments(fixed_payment, total_months, "total_paid")?;

    Ok(CalculationResult {
        first_installment: fixed_payment,
        last_installment: fixed_payment,
        total_paid,
        total_interest: total_paid - financed_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::monthly_rate_from_annual;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn run(financed_amount: i64, annual: Decimal, months: u32) -> CalculationResult {
        let monthly = monthly_rate_from_annual(annual).unwrap();
        price_schedule(financed_amount, monthly, months).unwrap()
    }

    #[test]
    fn test_twelve_percent_over_a_year() {
        let result = run(1_200_000, dec!(0.12), 12);

        assert_eq!(result.first_installment, 106_274);
        assert_eq!(result.last_installment, 106_274);
        assert_eq!(result.total_paid, 1_275_288);
        assert_eq!(result.total_interest, 75_288);
    }

    #[test]
    fn test_thirty_year_mortgage() {
        let result = run(40_000_000, dec!(0.08), 360);

        assert_eq!(result.first_installment, 285_759);
        assert_eq!(result.last_installment, result.first_installment);
        assert_eq!(result.total_paid, result.first_installment * 360);
        assert_eq!(result.total_paid, 102_873_240);
        assert_eq!(result.total_interest, 62_873_240);
    }

    #[test]
    fn test_zero_rate_splits_principal_evenly() {
        let result = run(120_000, dec!(0), 12);

        assert_eq!(result.first_installment, 10_000);
        assert_eq!(result.last_installment, 10_000);
        assert_eq!(result.total_paid, 120_000);
        assert_eq!(result.total_interest, 0);
    }

    #[test]
    fn test_zero_rate_tie_rounds_away_from_zero() {
        // 2.5 cents a month; half-to-even would give 2.
        let result = run(250, dec!(0), 100);

        assert_eq!(result.first_installment, 3);
        assert_eq!(result.total_paid, 300);
        assert_eq!(result.total_interest, 0);
    }

    #[rstest]
    #[case(99_999, 7)]
    #[case(40_000_001, 360)]
    fn test_zero_rate_rounding_drift_is_bounded_by_term(
        #[case] financed_amount: i64,
        #[case] months: u32,
    ) {
        let result = run(financed_amount, dec!(0), months);

        assert_eq!(result.total_interest, 0);
        assert!((result.total_paid - financed_amount).abs() < i64::from(months));
    }

    #[test]
    fn test_single_month_repays_principal_plus_one_month_of_interest() {
        let result = run(1_000_000, dec!(0.08), 1);

        assert_eq!(result.first_installment, 1_006_434);
        assert_eq!(result.total_paid, 1_006_434);
        assert_eq!(result.total_interest, 6_434);
    }

    #[test]
    fn test_twelve_hundred_percent_a_year() {
        let result = run(100_000, dec!(12), 12);

        assert_eq!(result.first_installment, 25_817);
        assert_eq!(result.last_installment, 25_817);
        assert_eq!(result.total_paid, 309_804);
        assert_eq!(result.total_interest, 209_804);
    }

    #[test]
    fn test_sub_half_cent_installment_rounds_to_zero() {
        // One cent at 8% a year over 30 years is about 0.007 cents a month.
        let result = run(1, dec!(0.08), 360);

        assert_eq!(result.first_installment, 0);
        assert_eq!(result.last_installment, 0);
        assert_eq!(result.total_paid, 0);
        assert_eq!(result.total_interest, -1);
    }

    #[test]
    fn test_overflowing_growth_falls_back_to_interest_only_payment() {
        // (1.2)^1_000_000 is far beyond Decimal range.
        let result = price_schedule(100_000, dec!(0.2), 1_000_000).unwrap();

        assert_eq!(result.first_installment, 20_000);
    }

    #[rstest]
    #[case(100_000, dec!(0.10), 7, 14_745)]
    #[case(40_000_000, dec!(0.08), 360, 285_759)]
    fn test_installment_is_constant(
        #[case] financed_amount: i64,
        #[case] annual: Decimal,
        #[case] months: u32,
        #[case] expected: i64,
    ) {
        let result = run(financed_amount, annual, months);

        assert_eq!(result.first_installment, expected);
        assert_eq!(result.first_installment, result.last_installment);
        assert!(result.total_paid > financed_amount);
        assert!(result.total_interest > 0);
    }
}
