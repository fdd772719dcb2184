use serde_json::Value;

use super::{lookup, result_of, scalar};

/// Headline figure per command: the grant total for stacking and
/// assessments, the annual benefit for savings.
const PRIORITY: [&str; 4] = [
    "plan.total",
    "total",
    "total_annual_benefit",
    "savings.total_annual_benefit",
];

/// Print just the key answer value from the output. Listings print one
/// name (or id) per line.
pub fn print_minimal(value: &Value) {
    let result = result_of(value);

    for line in minimal_lines(result) {
        println!("{line}");
    }
}

fn minimal_lines(result: &Value) -> Vec<String> {
    match result {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                lookup(item, "name")
                    .or_else(|| lookup(item, "id"))
                    .map(scalar)
                    .unwrap_or_else(|| scalar(item))
            })
            .collect(),
        Value::Object(map) => {
            if let Some(val) = PRIORITY
                .iter()
                .filter_map(|key| lookup(result, key))
                .find(|v| !v.is_null())
            {
                return vec![scalar(val)];
            }
            map.iter()
                .next()
                .map(|(key, val)| vec![format!("{key}: {}", scalar(val))])
                .unwrap_or_default()
        }
        other => vec![scalar(other)],
    }
}
