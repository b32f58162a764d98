use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Column order for payment schedule rows.
pub(crate) const SCHEDULE_COLUMNS: [&str; 6] = [
    "payment_number",
    "due_date",
    "payment_amount",
    "principal_portion",
    "interest_portion",
    "remaining_balance",
];

/// Format output as tables. Quote envelopes render as a summary table followed
/// by the payment schedule; everything else falls back to field/value rows.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => print_rows(arr, None),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        // Summary: every scalar field of the result
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            if !matches!(val, Value::Array(_)) {
                builder.push_record([key.as_str(), &format_value(val)]);
            }
        }
        println!("{}", Table::from(builder));

        if let Some(Value::Array(schedule)) = res_map.get("schedule") {
            println!("\nPayment schedule:");
            print_rows(schedule, Some(&SCHEDULE_COLUMNS));
        }
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_rows(arr: &[Value], columns: Option<&[&str]>) {
    if arr.is_empty() {
        return;
    }

    let headers: Vec<String> = match columns {
        Some(cols) => cols.iter().map(|c| c.to_string()).collect(),
        None => match arr.first() {
            Some(Value::Object(first)) => first.keys().cloned().collect(),
            _ => {
                for item in arr {
                    println!("{}", format_value(item));
                }
                return;
            }
        },
    };

    let mut builder = Builder::default();
    builder.push_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
