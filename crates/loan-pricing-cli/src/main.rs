mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::process;

use commands::affordability::AffordabilityArgs;
use commands::quote::QuoteArgs;
use commands::validate::ValidateArgs;

/// Short-term loan pricing and amortization
#[derive(Parser)]
#[command(
    name = "lpq",
    version,
    about = "Short-term loan pricing and amortization",
    long_about = "Prices regulated short-term consumer loans with decimal precision: \
                  risk-based APR selection, simple-interest weekly schedules, and \
                  responsible-lending affordability checks."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a loan and produce the full payment schedule
    Quote(QuoteArgs),
    /// Evaluate whether a borrower can afford a payment
    Affordability(AffordabilityArgs),
    /// Check a principal and term against lending limits
    Validate(ValidateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Affordability(args) => commands::affordability::run_affordability(args),
        Commands::Validate(args) => commands::validate::run_validate(args),
        Commands::Version => {
            println!("lpq {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            // Validation verdicts surface through the exit code as well
            let failed = value.get("valid").and_then(Value::as_bool) == Some(false);
            process::exit(if failed { 1 } else { 0 });
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
