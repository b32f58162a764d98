use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Invalid loan amount: {amount} — must be between {min} and {max}")]
    InvalidLoanAmount {
        amount: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("Invalid loan term: {weeks} weeks — must be between {min} and {max} weeks")]
    InvalidLoanTerm { weeks: u32, min: u32, max: u32 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PricingError {
    fn from(e: serde_json::Error) -> Self {
        PricingError::Serialization(e.to_string())
    }
}
