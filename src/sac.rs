//! SAC (Sistema de Amortização Constante).
//!
//! The principal portion of every installment is the same, interest is charged
//! on the outstanding balance, so installments decline over the term.

use rust_decimal::Decimal;

use crate::error::{FinancingError, FinancingResult};
use crate::rounding::to_cents;
use crate::types::CalculationResult;

/// Runs the SAC schedule month by month and summarizes it.
///
/// Balance, amortization and accrued interest stay at full `Decimal`
/// precision across the loop; only the first installment, the last
/// installment and the total interest are rounded, once each.
///
/// Expects validated arguments: `financed_amount > 0`, `total_months >= 1`.
pub(crate) fn sac_schedule(
    financed_amount: i64,
    monthly_interest_rate: Decimal,
    total_months: u32,
) -> FinancingResult<CalculationResult> {
    let total_amount = Decimal::from(financed_amount);
    let fixed_amortization = total_amount / Decimal::from(total_months);

    let mut current_balance = total_amount;
    let mut first_payment: Option<Decimal> = None;
    let mut last_payment: Option<Decimal> = None;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=total_months {
        let interest_payment = current_balance * monthly_interest_rate;
        let current_payment = fixed_amortization + interest_payment;
        total_interest = total_interest
            .checked_add(interest_payment)
            .ok_or(FinancingError::AmountOutOfRange { field: "total_interest" })?;

        if month == 1 {
            first_payment = Some(current_payment);
        }
        if month == total_months {
            last_payment = Some(current_payment);
        }

        current_balance -= fixed_amortization;
    }

    let total_interest = to_cents(total_interest, "total_interest")?;
    let total_paid = financed_amount
        .checked_add(total_interest)
        .ok_or(FinancingError::AmountOutOfRange { field: "total_paid" })?;

    Ok(CalculationResult {
        first_installment: to_cents(first_payment.unwrap_or_default(), "first_installment")?,
        last_installment: to_cents(last_payment.unwrap_or_default(), "last_installment")?,
        total_paid,
        total_interest,
    })
}
