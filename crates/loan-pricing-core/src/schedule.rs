//! Simple-interest amortization for weekly-repayment loans.
//!
//! Interest is computed once on the original principal, prorated over a
//! 52-week year, and split evenly across the term. Every monetary field is
//! rounded to the cent at assignment; the final payment absorbs whatever
//! residual the equal split leaves so the schedule retires the debt exactly.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::rates::select_apr;
use crate::types::{round_cents, with_metadata, ComputationOutput, Money, Rate};
use crate::validation::{validate_principal, validate_term};
use crate::PricingResult;

const WEEKS_PER_YEAR: Decimal = dec!(52);
/// Average weeks per month, used only for the indicative monthly figure.
const WEEKS_PER_MONTH: Decimal = dec!(4.33);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// A borrower's requested loan, before pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Money,
    pub term_weeks: u32,
}

/// Input for building a schedule with a known APR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub principal: Money,
    pub term_weeks: u32,
    /// Annual rate as a decimal (0.20 = 20%).
    pub apr: Rate,
    /// First payment falls due one week after this date.
    pub start_date: NaiveDate,
}

/// A fully priced loan with its payment schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal: Money,
    pub term_weeks: u32,
    pub apr: Rate,
    pub weekly_payment: Money,
    /// Indicative only (weekly x 4.33); the weekly schedule is authoritative.
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_repayment: Money,
    pub schedule: Vec<PaymentScheduleItem>,
}

/// One row of the payment schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentScheduleItem {
    /// 1-based ordinal.
    pub payment_number: u32,
    pub due_date: NaiveDate,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Price a loan request end to end: validate, select the APR, then build the
/// schedule. This is the entry point the application form calls for a live
/// payment preview.
pub fn price_loan(
    request: &LoanRequest,
    start_date: NaiveDate,
) -> PricingResult<ComputationOutput<LoanQuote>> {
    validate_principal(request.principal)?;
    validate_term(request.term_weeks)?;

    let apr = select_apr(request.principal, request.term_weeks);
    build_schedule(&ScheduleInput {
        principal: request.principal,
        term_weeks: request.term_weeks,
        apr,
        start_date,
    })
}

/// Expand a principal, term, and APR into totals and a per-week schedule.
///
/// Simple interest: `total_interest = principal x apr x term / 52`. Equal
/// installments, except the final payment is set to the carried balance so
/// the schedule sums exactly to `total_repayment` and ends at zero.
pub fn build_schedule(input: &ScheduleInput) -> PricingResult<ComputationOutput<LoanQuote>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_principal(input.principal)?;
    validate_term(input.term_weeks)?;

    let term = Decimal::from(input.term_weeks);

    let total_interest = round_cents(input.principal * input.apr * term / WEEKS_PER_YEAR);
    let total_repayment = round_cents(input.principal + total_interest);
    let weekly_payment = round_cents(total_repayment / term);
    let monthly_payment = round_cents(weekly_payment * WEEKS_PER_MONTH);
    let interest_portion = round_cents(total_interest / term);

    warnings.push(format!(
        "monthly_payment is an approximation (weekly_payment x {WEEKS_PER_MONTH}); \
         the weekly schedule is authoritative"
    ));

    let mut schedule = Vec::with_capacity(input.term_weeks as usize);
    let mut remaining_balance = total_repayment;

    for i in 1..=input.term_weeks {
        let due_date = input.start_date + Duration::weeks(i64::from(i));
        // The last installment takes the carried balance, not the nominal
        // weekly payment, so rounding residue never survives the term.
        let payment_amount = if i == input.term_weeks {
            remaining_balance
        } else {
            weekly_payment
        };
        let principal_portion = round_cents(payment_amount - interest_portion);
        remaining_balance = round_cents(remaining_balance - payment_amount);

        schedule.push(PaymentScheduleItem {
            payment_number: i,
            due_date,
            payment_amount,
            principal_portion,
            interest_portion,
            remaining_balance,
        });
    }

    let quote = LoanQuote {
        principal: input.principal,
        term_weeks: input.term_weeks,
        apr: input.apr,
        weekly_payment,
        monthly_payment,
        total_interest,
        total_repayment,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "interest_method": "simple",
        "weeks_per_year": WEEKS_PER_YEAR.to_string(),
        "weeks_per_month": WEEKS_PER_MONTH.to_string(),
        "rounding": "half-up to the cent at assignment",
    });

    Ok(with_metadata(
        "Simple-Interest Weekly Amortization",
        &assumptions,
        warnings,
        elapsed,
        quote,
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

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn base_input() -> ScheduleInput {
        ScheduleInput {
            principal: dec!(1000),
            term_weeks: 12,
            apr: dec!(0.20),
            start_date: start(),
        }
    }

    #[test]
    fn test_totals_for_reference_loan() {
        let quote = build_schedule(&base_input()).unwrap().result;
        // 1000 * 0.20 * 12 / 52 = 46.1538... -> 46.15
        assert_eq!(quote.total_interest, dec!(46.15));
        assert_eq!(quote.total_repayment, dec!(1046.15));
        // 1046.15 / 12 = 87.1791... -> 87.18
        assert_eq!(quote.weekly_payment, dec!(87.18));
        // 87.18 * 4.33 = 377.4894 -> 377.49
        assert_eq!(quote.monthly_payment, dec!(377.49));
    }

    #[test]
    fn test_final_payment_absorbs_rounding_residue() {
        let quote = build_schedule(&base_input()).unwrap().result;
        // 11 * 87.18 = 958.98, leaving 87.17 for the last installment
        let last = quote.schedule.last().unwrap();
        assert_eq!(last.payment_amount, dec!(87.17));
        assert_eq!(last.remaining_balance, dec!(0.00));
    }

    #[test]
    fn test_schedule_length_and_ordering() {
        let quote = build_schedule(&base_input()).unwrap().result;
        assert_eq!(quote.schedule.len(), 12);
        for (idx, item) in quote.schedule.iter().enumerate() {
            assert_eq!(item.payment_number, idx as u32 + 1);
        }
    }

    #[test]
    fn test_due_dates_advance_weekly() {
        let quote = build_schedule(&base_input()).unwrap().result;
        assert_eq!(
            quote.schedule[0].due_date,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
        assert_eq!(
            quote.schedule[11].due_date,
            NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
        );
    }

    #[test]
    fn test_conservation_across_domain() {
        for principal in [dec!(100), dec!(333.33), dec!(1000), dec!(2499.99), dec!(5000)] {
            for term_weeks in [2, 7, 13, 20, 26] {
                let quote = price_loan(
                    &LoanRequest {
                        principal,
                        term_weeks,
                    },
                    start(),
                )
                .unwrap()
                .result;

                let paid: Decimal = quote.schedule.iter().map(|p| p.payment_amount).sum();
                assert_eq!(paid, quote.total_repayment, "{principal} over {term_weeks}w");
                assert_eq!(quote.schedule.len(), term_weeks as usize);
                assert_eq!(
                    quote.schedule.last().unwrap().remaining_balance,
                    dec!(0.00)
                );
            }
        }
    }

    #[test]
    fn test_balance_strictly_decreasing() {
        let quote = build_schedule(&base_input()).unwrap().result;
        let mut prev = quote.total_repayment;
        for item in &quote.schedule {
            assert!(item.remaining_balance < prev);
            prev = item.remaining_balance;
        }
    }

    #[test]
    fn test_price_loan_selects_rate() {
        let quote = price_loan(
            &LoanRequest {
                principal: dec!(1000),
                term_weeks: 12,
            },
            start(),
        )
        .unwrap()
        .result;
        assert_eq!(quote.apr, dec!(0.20));
    }

    #[test]
    fn test_price_loan_rejects_out_of_range() {
        assert!(price_loan(
            &LoanRequest {
                principal: dec!(50),
                term_weeks: 12,
            },
            start(),
        )
        .is_err());
        assert!(price_loan(
            &LoanRequest {
                principal: dec!(1000),
                term_weeks: 52,
            },
            start(),
        )
        .is_err());
    }

    #[test]
    fn test_deterministic_quotes() {
        let a = build_schedule(&base_input()).unwrap().result;
        let b = build_schedule(&base_input()).unwrap().result;
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
