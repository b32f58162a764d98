//! Risk-based APR selection for short-term consumer loans.
//!
//! Rates follow a fixed principal-tier table with term adjustments, clamped to
//! the regulatory band. The selector is a total pure function: for any input it
//! returns a rate inside `[APR_FLOOR, APR_CAP]`.

use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Regulatory floor on the annual percentage rate.
pub const APR_FLOOR: Rate = dec!(0.15);
/// Regulatory cap on the annual percentage rate.
pub const APR_CAP: Rate = dec!(0.35);

/// Base rate for loans of 2,500 and above.
const BASE_APR: Rate = dec!(0.15);
/// Loans under 500.
const SMALL_LOAN_APR: Rate = dec!(0.30);
/// Loans in [500, 1,000).
const MEDIUM_LOAN_APR: Rate = dec!(0.25);
/// Loans in [1,000, 2,500).
const LARGE_LOAN_APR: Rate = dec!(0.20);

const SMALL_LOAN_CEILING: Money = dec!(500);
const MEDIUM_LOAN_CEILING: Money = dec!(1000);
const LARGE_LOAN_CEILING: Money = dec!(2500);

/// Terms at or below this length carry a premium.
const SHORT_TERM_MAX_WEEKS: u32 = 4;
/// Terms at or above this length earn a discount.
const LONG_TERM_MIN_WEEKS: u32 = 20;

const SHORT_TERM_PREMIUM: Rate = dec!(0.05);
const LONG_TERM_DISCOUNT: Rate = dec!(0.02);

/// Select the APR for a requested principal and term.
///
/// Assumes the input has already passed [`crate::validation`]; out-of-range
/// values still produce a clamped, in-band rate.
pub fn select_apr(principal: Money, term_weeks: u32) -> Rate {
    let mut apr = if principal < SMALL_LOAN_CEILING {
        SMALL_LOAN_APR
    } else if principal < MEDIUM_LOAN_CEILING {
        MEDIUM_LOAN_APR
    } else if principal < LARGE_LOAN_CEILING {
        LARGE_LOAN_APR
    } else {
        BASE_APR
    };

    if term_weeks <= SHORT_TERM_MAX_WEEKS {
        apr += SHORT_TERM_PREMIUM;
    } else if term_weeks >= LONG_TERM_MIN_WEEKS {
        apr -= LONG_TERM_DISCOUNT;
    }

    // Regulatory band is the final word, whatever the tiers produced.
    apr.clamp(APR_FLOOR, APR_CAP)
}
