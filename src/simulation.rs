//! Property financing simulation: property value minus down payment, financed
//! under the chosen amortization system.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{FinancingError, FinancingResult};
use crate::system::AmortizationSystem;
use crate::types::{CalculationInput, CalculationResult};

/// A financing simulation as submitted by a prospective buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancingRequest {
    /// Property price, in cents.
    pub property_value: i64,
    /// Down payment, in cents.
    pub down_payment_value: i64,
    /// Annual effective interest rate as a fraction.
    pub annual_interest_rate: Decimal,
    pub term_in_months: u32,
    pub calculation_type: AmortizationSystem,
}

impl Default for FinancingRequest {
    /// R$ 500.000,00 property, 20% down, 8% a year over 30 years, SAC.
    fn default() -> Self {
        Self {
            property_value: 50_000_000,
            down_payment_value: 10_000_000,
            annual_interest_rate: dec!(0.08),
            term_in_months: 360,
            calculation_type: AmortizationSystem::Sac,
        }
    }
}

/// The outcome of a simulation, with the schedule summary inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    #[serde(flatten)]
    pub result: CalculationResult,
    pub calculation_type: AmortizationSystem,
    /// Property value minus down payment, in cents.
    pub financed_amount: i64,
}

impl FinancingRequest {
    /// The amount left to finance after the down payment.
    ///
    /// # Errors
    ///
    /// Fails when the property value is not positive, the down payment is
    /// negative, or the down payment covers the whole property.
    pub fn financed_amount(&self) -> FinancingResult<i64> {
        let outcome = if self.property_value <= 0 {
            Err(FinancingError::InvalidPropertyValue(self.property_value))
        } else if self.down_payment_value < 0 {
            Err(FinancingError::InvalidDownPayment(self.down_payment_value))
        } else {
            // Both operands are in range here, so the subtraction cannot overflow.
            let financed_amount = self.property_value - self.down_payment_value;
            if financed_amount <= 0 {
                Err(FinancingError::InvalidPrincipal(financed_amount))
            } else {
                Ok(financed_amount)
            }
        };

        if let Err(ref err) = outcome {
            warn!(request = ?self, error = %err, "rejected financing request");
        }
        outcome
    }

    /// The engine input equivalent to this request.
    pub fn calculation_input(&self) -> FinancingResult<CalculationInput> {
        Ok(CalculationInput::new(
            self.financed_amount()?,
            self.annual_interest_rate,
            self.term_in_months,
        ))
    }

    /// Runs the requested amortization system on the financed amount.
    pub fn simulate(&self) -> FinancingResult<SimulationResult> {
        let input = self.calculation_input()?;
        let result = self.calculation_type.compute(&input)?;

        debug!(
            property_value = self.property_value,
            down_payment_value = self.down_payment_value,
            financed_amount = input.financed_amount,
            "simulated financing"
        );

        Ok(SimulationResult {
            result,
            calculation_type: self.calculation_type,
            financed_amount: input.financed_amount,
        })
    }
}
