use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use loan_pricing_core::schedule::{self, LoanRequest, ScheduleInput};

use crate::input;

/// Arguments for pricing a loan
#[derive(Args)]
pub struct QuoteArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Requested principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Requested term in weeks
    #[arg(long)]
    pub term_weeks: Option<u32>,

    /// First payment falls due one week after this date (defaults to today)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Override the selected APR (decimal, e.g. 0.20)
    #[arg(long)]
    pub apr: Option<Decimal>,
}

/// File/stdin payload for a quote. Mirrors the flag set.
#[derive(Deserialize)]
struct QuoteRequest {
    principal: Decimal,
    term_weeks: u32,
    start_date: Option<NaiveDate>,
    apr: Option<Decimal>,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: QuoteRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        QuoteRequest {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            term_weeks: args
                .term_weeks
                .ok_or("--term-weeks is required (or provide --input)")?,
            start_date: args.start_date,
            apr: args.apr,
        }
    };

    let start_date = request
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());

    let output = match request.apr {
        Some(apr) => schedule::build_schedule(&ScheduleInput {
            principal: request.principal,
            term_weeks: request.term_weeks,
            apr,
            start_date,
        })?,
        None => schedule::price_loan(
            &LoanRequest {
                principal: request.principal,
                term_weeks: request.term_weeks,
            },
            start_date,
        )?,
    };

    Ok(serde_json::to_value(output)?)
}
