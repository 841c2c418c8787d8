//! `br_amortization` is a Rust library for calculating real estate financing in Brazil.
//!
//! It summarizes a loan under the two amortization systems used for real estate
//! financing in Brazil:
//! - **SAC (Sistema de Amortização Constante)**: Characterized by fixed amortization payments,
//!   leading to decreasing total payments over time.
//! - **Price (Sistema Francês de Amortização)**: Characterized by fixed total payments
//!   throughout the financing period.
//!
//! Money goes in and comes out as integer cents (`i64`); the interest rate is an
//! annual effective rate expressed as a fraction (`0.08` for 8% a year). Every
//! intermediate value is a [`rust_decimal::Decimal`], and each reported amount is
//! rounded once, half away from zero.
//!
//! ## Usage
//!
//! ```rust
//! use br_amortization::{compute_price_schedule, compute_sac_schedule, CalculationInput};
//! use rust_decimal_macros::dec;
//!
//! // R$ 400.000,00 at 8% a year over 30 years.
//! let input = CalculationInput::new(40_000_000, dec!(0.08), 360);
//!
//! let sac = compute_sac_schedule(&input).unwrap();
//! assert!(sac.first_installment > sac.last_installment);
//!
//! let price = compute_price_schedule(&input).unwrap();
//! assert_eq!(price.first_installment, price.last_installment);
//! assert_eq!(price.total_paid, price.first_installment * 360);
//! ```
//!
//! The engine keeps no state, so every function here can be called from any
//! number of threads at once.

pub mod error;
pub mod price;
pub mod rate;
pub mod rounding;
pub mod sac;
pub mod simulation;
pub mod system;
pub mod types;

pub use error::{FinancingError, FinancingResult};
pub use rate::{annual_rate_from_monthly, annual_rate_from_percent, monthly_rate_from_annual};
pub use simulation::{FinancingRequest, SimulationResult};
pub use system::{
    compare_systems, compute_price_schedule, compute_sac_schedule, AmortizationSystem,
    SystemComparison,
};
pub use types::{CalculationInput, CalculationResult};
