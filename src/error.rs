use rust_decimal::Decimal;
use thiserror::Error;

/// Input validation failures reported by the engine.
///
/// Every variant is raised before any arithmetic happens, so a failure never
/// leaves a partial result behind and is never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinancingError {
    #[error("Invalid principal: financed amount must be positive, got {0} cents")]
    InvalidPrincipal(i64),

    #[error("Invalid term: term must be at least one month, got {0}")]
    InvalidTerm(u32),

    #[error("Invalid rate: annual interest rate cannot be negative, got {0}")]
    InvalidRate(Decimal),

    #[error("Invalid property value: must be positive, got {0} cents")]
    InvalidPropertyValue(i64),

    #[error("Invalid down payment: cannot be negative, got {0} cents")]
    InvalidDownPayment(i64),

    #[error("Unknown amortization system '{0}', expected SAC or PRICE")]
    UnknownSystem(String),

    #[error("Amount out of range: {field} exceeds the representable range")]
    AmountOutOfRange { field: &'static str },
}

/// Result type for all engine operations.
pub type FinancingResult<T> = Result<T, FinancingError>;
