//! Advisory input guards for loan applications.
//!
//! Callers are expected to run these before pricing; the rate selector and
//! amortization builder assume pre-validated input but re-check defensively.

use rust_decimal_macros::dec;

use crate::{types::Money, PricingError, PricingResult};

/// Smallest loan the lender writes.
pub const MIN_PRINCIPAL: Money = dec!(100);
/// Largest loan the lender writes.
pub const MAX_PRINCIPAL: Money = dec!(5000);
/// Shortest permissible term.
pub const MIN_TERM_WEEKS: u32 = 2;
/// Longest permissible term (six months).
pub const MAX_TERM_WEEKS: u32 = 26;

/// Check a requested principal against lending limits.
pub fn validate_principal(amount: Money) -> PricingResult<()> {
    if amount < MIN_PRINCIPAL || amount > MAX_PRINCIPAL {
        return Err(PricingError::InvalidLoanAmount {
            amount,
            min: MIN_PRINCIPAL,
            max: MAX_PRINCIPAL,
        });
    }
    Ok(())
}

/// Check a requested term against lending limits.
pub fn validate_term(weeks: u32) -> PricingResult<()> {
    if weeks < MIN_TERM_WEEKS || weeks > MAX_TERM_WEEKS {
        return Err(PricingError::InvalidLoanTerm {
            weeks,
            min: MIN_TERM_WEEKS,
            max: MAX_TERM_WEEKS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_principal_bounds_inclusive() {
        assert!(validate_principal(dec!(100)).is_ok());
        assert!(validate_principal(dec!(5000)).is_ok());
        assert!(validate_principal(dec!(2750.50)).is_ok());
    }

    #[test]
    fn test_principal_out_of_range() {
        assert!(matches!(
            validate_principal(dec!(99.99)),
            Err(PricingError::InvalidLoanAmount { .. })
        ));
        assert!(matches!(
            validate_principal(dec!(5000.01)),
            Err(PricingError::InvalidLoanAmount { .. })
        ));
    }

    #[test]
    fn test_term_bounds_inclusive() {
        assert!(validate_term(2).is_ok());
        assert!(validate_term(26).is_ok());
    }

    #[test]
    fn test_term_out_of_range() {
        assert!(matches!(
            validate_term(1),
            Err(PricingError::InvalidLoanTerm { .. })
        ));
        assert!(matches!(
            validate_term(27),
            Err(PricingError::InvalidLoanTerm { .. })
        ));
    }
}
