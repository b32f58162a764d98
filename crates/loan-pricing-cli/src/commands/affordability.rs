use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_pricing_core::affordability::{self, AffordabilityInput};

use crate::input;

/// Arguments for the affordability check
#[derive(Args)]
pub struct AffordabilityArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Declared gross monthly income
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Declared monthly expenses
    #[arg(long)]
    pub monthly_expenses: Option<Decimal>,

    /// Monthly payment under test (a quote's monthly figure)
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,
}

pub fn run_affordability(args: AffordabilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let afford_input: AffordabilityInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AffordabilityInput {
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            monthly_expenses: args
                .monthly_expenses
                .ok_or("--monthly-expenses is required (or provide --input)")?,
            monthly_payment: args
                .monthly_payment
                .ok_or("--monthly-payment is required (or provide --input)")?,
        }
    };

    let output = affordability::evaluate_affordability(&afford_input)?;
    Ok(serde_json::to_value(output)?)
}
