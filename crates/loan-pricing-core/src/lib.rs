pub mod affordability;
pub mod error;
pub mod rates;
pub mod schedule;
pub mod types;
pub mod validation;

pub use error::PricingError;
pub use types::*;

/// Standard result type for all pricing operations
pub type PricingResult<T> = Result<T, PricingError>;
