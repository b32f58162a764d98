use serde_json::Value;
use std::io;

use super::table::SCHEDULE_COLUMNS;

/// Write output as CSV to stdout. Quote envelopes emit the payment schedule
/// as rows; other results emit two-column field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let result = map.get("result").unwrap_or(value);
            if let Some(Value::Array(schedule)) =
                result.as_object().and_then(|r| r.get("schedule"))
            {
                write_schedule_csv(&mut wtr, schedule);
            } else if let Value::Object(fields) = result {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in fields {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            for item in arr {
                let _ = wtr.write_record([&format_csv_value(item)]);
            }
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_schedule_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, schedule: &[Value]) {
    let _ = wtr.write_record(SCHEDULE_COLUMNS);
    for item in schedule {
        if let Value::Object(map) = item {
            let row: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
