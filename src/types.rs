use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FinancingError, FinancingResult};
use crate::rate::check_annual_rate;

/// Input parameters for a single amortization calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The principal to amortize, in cents.
    pub financed_amount: i64,
    /// The annual effective interest rate as a fraction (e.g., 0.08 for 8%).
    pub annual_interest_rate: Decimal,
    /// The number of monthly installments.
    pub term_in_months: u32,
}

impl CalculationInput {
    pub fn new(financed_amount: i64, annual_interest_rate: Decimal, term_in_months: u32) -> Self {
        Self {
            financed_amount,
            annual_interest_rate,
            term_in_months,
        }
    }

    /// Checks principal, term and rate, in that order.
    pub fn validate(&self) -> FinancingResult<()> {
        let outcome = if self.financed_amount <= 0 {
            Err(FinancingError::InvalidPrincipal(self.financed_amount))
        } else if self.term_in_months == 0 {
            Err(FinancingError::InvalidTerm(self.term_in_months))
        } else {
            check_annual_rate(self.annual_interest_rate)
        };

        if let Err(ref err) = outcome {
            warn!(input = ?self, error = %err, "rejected calculation input");
        }
        outcome
    }
}

/// Summary of an amortization schedule. All amounts are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The amount due in the first month.
    pub first_installment: i64,
    /// The amount due in the last month.
    pub last_installment: i64,
    /// Principal plus all interest billed over the term.
    pub total_paid: i64,
    /// The interest portion of `total_paid`.
    pub total_interest: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_input_passes() {
        assert!(CalculationInput::new(40_000_000, dec!(0.08), 360).validate().is_ok());
        assert!(CalculationInput::new(1, dec!(0), 1).validate().is_ok());
    }

    #[rstest]
    #[case(CalculationInput::new(0, dec!(0.08), 360), FinancingError::InvalidPrincipal(0))]
    #[case(CalculationInput::new(-100, dec!(0.08), 360), FinancingError::InvalidPrincipal(-100))]
    #[case(CalculationInput::new(100, dec!(0.08), 0), FinancingError::InvalidTerm(0))]
    #[case(CalculationInput::new(100, dec!(-0.08), 12), FinancingError::InvalidRate(dec!(-0.08)))]
    #[case(CalculationInput::new(0, dec!(-1), 0), FinancingError::InvalidPrincipal(0))]
    #[case(CalculationInput::new(100, dec!(-1), 0), FinancingError::InvalidTerm(0))]
    fn test_invalid_input_is_rejected_in_order(
        #[case] input: CalculationInput,
        #[case] expected: FinancingError,
    ) {
        assert_eq!(input.validate(), Err(expected));
    }

    #[test]
    fn test_input_deserializes_from_json() {
        let input: CalculationInput = serde_json::from_value(serde_json::json!({
            "financed_amount": 40000000,
            "annual_interest_rate": "0.08",
            "term_in_months": 360
        }))
        .unwrap();
        assert_eq!(input, CalculationInput::new(40_000_000, dec!(0.08), 360));
    }

    #[test]
    fn test_result_serializes_as_integer_cents() {
        let result = CalculationResult {
            first_installment: 10_000,
            last_installment: 10_000,
            total_paid: 120_000,
            total_interest: 0,
        };
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "first_installment": 10000,
                "last_installment": 10000,
                "total_paid": 120000,
                "total_interest": 0
            })
        );
    }
}
