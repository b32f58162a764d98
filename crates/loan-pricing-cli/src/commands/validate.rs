use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use loan_pricing_core::validation::{validate_principal, validate_term};

/// Arguments for validating loan parameters
#[derive(Args)]
pub struct ValidateArgs {
    /// Principal to check against lending limits
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Term in weeks to check against lending limits
    #[arg(long)]
    pub term_weeks: Option<u32>,
}

/// Run the advisory guards and report a field-level verdict for each value
/// supplied. The process exits non-zero when any field fails, so the command
/// works as a scriptable precheck.
pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.principal.is_none() && args.term_weeks.is_none() {
        return Err("provide --principal and/or --term-weeks".into());
    }

    let mut fields = serde_json::Map::new();
    let mut valid = true;

    if let Some(principal) = args.principal {
        let verdict = match validate_principal(principal) {
            Ok(()) => json!({ "value": principal, "valid": true }),
            Err(e) => {
                valid = false;
                json!({ "value": principal, "valid": false, "message": e.to_string() })
            }
        };
        fields.insert("principal".into(), verdict);
    }

    if let Some(weeks) = args.term_weeks {
        let verdict = match validate_term(weeks) {
            Ok(()) => json!({ "value": weeks, "valid": true }),
            Err(e) => {
                valid = false;
                json!({ "value": weeks, "valid": false, "message": e.to_string() })
            }
        };
        fields.insert("term_weeks".into(), verdict);
    }

    Ok(json!({ "valid": valid, "fields": fields }))
}
