pub mod affordability;
pub mod quote;
pub mod validate;
