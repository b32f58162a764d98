//! Responsible-lending affordability test.
//!
//! Consumes a computed monthly payment alongside declared income and expenses.
//! Both the DTI ceiling and the disposable-income buffer must pass for an
//! affirmative verdict.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{round_cents, round_pct, with_metadata, ComputationOutput, Money, Rate};
use crate::PricingResult;

/// DTI ceiling in percent.
const MAX_DTI_PCT: Decimal = dec!(25.0);
/// Disposable income must cover the payment with this buffer.
const DISPOSABLE_BUFFER: Decimal = dec!(1.2);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub monthly_income: Money,
    pub monthly_expenses: Money,
    /// The payment under test, typically a quote's monthly figure.
    pub monthly_payment: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub can_afford: bool,
    /// Debt-to-income in percent, one decimal. `None` when income is zero,
    /// which always fails the test.
    pub dti_ratio: Option<Rate>,
    pub disposable_income: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate whether a borrower can afford a monthly payment.
///
/// `can_afford` requires both `dti_ratio <= 25.0` and
/// `disposable_income >= monthly_payment * 1.2`. Zero income never divides;
/// it yields `can_afford = false` with `dti_ratio = None`.
pub fn evaluate_affordability(
    input: &AffordabilityInput,
) -> PricingResult<ComputationOutput<AffordabilityResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let disposable_income = round_cents(input.monthly_income - input.monthly_expenses);

    let (can_afford, dti_ratio) = if input.monthly_income.is_zero() {
        warnings.push("monthly_income is zero; DTI is undefined and the verdict is negative".into());
        (false, None)
    } else {
        let dti = round_pct(input.monthly_payment / input.monthly_income * dec!(100));
        let passes = dti <= MAX_DTI_PCT
            && disposable_income >= input.monthly_payment * DISPOSABLE_BUFFER;
        (passes, Some(dti))
    };

    let result = AffordabilityResult {
        can_afford,
        dti_ratio,
        disposable_income,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "max_dti_pct": MAX_DTI_PCT.to_string(),
        "disposable_buffer": DISPOSABLE_BUFFER.to_string(),
    });

    Ok(with_metadata(
        "Debt-to-Income Affordability Test",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn evaluate(income: Money, expenses: Money, payment: Money) -> AffordabilityResult {
        evaluate_affordability(&AffordabilityInput {
            monthly_income: income,
            monthly_expenses: expenses,
            monthly_payment: payment,
        })
        .unwrap()
        .result
    }

    #[test]
    fn test_affordable_borrower() {
        let res = evaluate(dec!(4500), dec!(3000), dec!(375));
        assert_eq!(res.disposable_income, dec!(1500));
        assert_eq!(res.dti_ratio, Some(dec!(8.3)));
        assert!(res.can_afford);
    }

    #[test]
    fn test_dti_failure_alone_rejects() {
        // Disposable income (100) also fails here, but DTI is the headline
        let res = evaluate(dec!(1000), dec!(900), dec!(375));
        assert_eq!(res.dti_ratio, Some(dec!(37.5)));
        assert!(!res.can_afford);
    }

    #[test]
    fn test_low_dti_but_thin_disposable_rejects() {
        // DTI = 5%, but disposable 110 < 100 * 1.2
        let res = evaluate(dec!(2000), dec!(1890), dec!(100));
        assert_eq!(res.dti_ratio, Some(dec!(5.0)));
        assert_eq!(res.disposable_income, dec!(110));
        assert!(!res.can_afford);
    }

    #[test]
    fn test_buffer_boundary_passes() {
        // Disposable exactly payment * 1.2
        let res = evaluate(dec!(2000), dec!(1880), dec!(100));
        assert_eq!(res.disposable_income, dec!(120));
        assert!(res.can_afford);
    }

    #[test]
    fn test_zero_income_is_defined_negative() {
        let res = evaluate(dec!(0), dec!(500), dec!(100));
        assert!(!res.can_afford);
        assert_eq!(res.dti_ratio, None);
        assert_eq!(res.disposable_income, dec!(-500));
    }

    #[test]
    fn test_zero_income_carries_warning() {
        let out = evaluate_affordability(&AffordabilityInput {
            monthly_income: dec!(0),
            monthly_expenses: dec!(0),
            monthly_payment: dec!(50),
        })
        .unwrap();
        assert!(!out.warnings.is_empty());
    }
}
