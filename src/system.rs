//! The amortization regime abstraction and the public entry points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FinancingError, FinancingResult};
use crate::price::price_schedule;
use crate::rate::monthly_rate_from_annual;
use crate::sac::sac_schedule;
use crate::types::{CalculationInput, CalculationResult};

/// The amortization regimes regulated for real estate financing in Brazil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AmortizationSystem {
    /// Constant amortization, declining installments.
    Sac,
    /// Constant installment.
    Price,
}

impl AmortizationSystem {
    /// Validates the input, converts the rate and runs the selected calculator.
    ///
    /// # Errors
    ///
    /// Returns [`FinancingError::InvalidPrincipal`], [`FinancingError::InvalidTerm`]
    /// or [`FinancingError::InvalidRate`] for bad input, and
    /// [`FinancingError::AmountOutOfRange`] when an intermediate value leaves
    /// the `Decimal` range or a reported amount would not fit in 64-bit cents.
    pub fn compute(self, input: &CalculationInput) -> FinancingResult<CalculationResult> {
        input.validate()?;
        let monthly_interest_rate = monthly_rate_from_annual(input.annual_interest_rate)?;

        let result = match self {
            AmortizationSystem::Sac => {
                sac_schedule(input.financed_amount, monthly_interest_rate, input.term_in_months)
            }
            AmortizationSystem::Price => {
                price_schedule(input.financed_amount, monthly_interest_rate, input.term_in_months)
            }
        }?;

        debug!(
            system = %self,
            financed_amount = input.financed_amount,
            annual_interest_rate = %input.annual_interest_rate,
            term_in_months = input.term_in_months,
            %monthly_interest_rate,
            ?result,
            "computed amortization schedule"
        );
        Ok(result)
    }
}

impl fmt::Display for AmortizationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmortizationSystem::Sac => f.write_str("SAC"),
            AmortizationSystem::Price => f.write_str("PRICE"),
        }
    }
}

impl FromStr for AmortizationSystem {
    type Err = FinancingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAC" => Ok(AmortizationSystem::Sac),
            "PRICE" => Ok(AmortizationSystem::Price),
            _ => Err(FinancingError::UnknownSystem(s.to_string())),
        }
    }
}

/// Computes the constant installment (Price) schedule summary.
///
/// For principals of a few cents the rounded installment can be zero; see
/// [`crate::price`] for the rounding limits of the Price table.
pub fn compute_price_schedule(input: &CalculationInput) -> FinancingResult<CalculationResult> {
    AmortizationSystem::Price.compute(input)
}

/// Computes the constant amortization (SAC) schedule summary.
pub fn compute_sac_schedule(input: &CalculationInput) -> FinancingResult<CalculationResult> {
    AmortizationSystem::Sac.compute(input)
}

/// Both regimes side by side for the same loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemComparison {
    /// The principal both schedules amortize, in cents.
    pub financed_amount: i64,
    pub price: CalculationResult,
    pub sac: CalculationResult,
    /// How much less interest SAC charges than Price, in cents.
    pub interest_savings: i64,
}

/// Runs both calculators on the same input.
pub fn compare_systems(input: &CalculationInput) -> FinancingResult<SystemComparison> {
    let price = compute_price_schedule(input)?;
    let sac = compute_sac_schedule(input)?;

    Ok(SystemComparison {
        financed_amount: input.financed_amount,
        interest_savings: price.total_interest - sac.total_interest,
        price,
        sac,
    })
}
