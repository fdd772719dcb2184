pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` of a computation envelope, or the value itself for plain
/// listings.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Flatten nested objects into `a.b.c` keys. Array elements are keyed by
/// index (`plan.incentives.0.amount`); arrays of scalars stay on one line.
pub(crate) fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten(&join_key(prefix, key), val, out);
            }
        }
        Value::Array(items) if items.iter().any(|v| v.is_object() || v.is_array()) => {
            for (i, item) in items.iter().enumerate() {
                flatten(&join_key(prefix, &i.to_string()), item, out);
            }
        }
        _ => out.push((prefix.to_string(), scalar(value))),
    }
}

pub(crate) fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Display form of a leaf. Decimals already arrive as strings.
pub(crate) fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Follow a dotted path through nested objects.
pub(crate) fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |node, key| node.as_object().and_then(|m| m.get(key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flatten_uses_dotted_and_indexed_keys() {
        let value = json!({
            "plan": {
                "total": "13440",
                "incentives": [{ "id": "BEG_WG", "amount": "8400" }]
            },
            "warnings": ["a", "b"]
        });
        let mut rows = Vec::new();
        flatten("", &value, &mut rows);

        assert!(rows.contains(&("plan.total".into(), "13440".into())));
        assert!(rows.contains(&("plan.incentives.0.id".into(), "BEG_WG".into())));
        assert!(rows.contains(&("warnings".into(), "a, b".into())));
    }

    #[test]
    fn lookup_walks_nested_objects() {
        let value = json!({ "savings": { "total_annual_benefit": "1592.27" } });
        assert_eq!(
            lookup(&value, "savings.total_annual_benefit"),
            Some(&json!("1592.27"))
        );
        assert!(lookup(&value, "savings.missing").is_none());
    }

    #[test]
    fn result_of_unwraps_the_envelope() {
        let wrapped = json!({ "result": { "total": "1" }, "methodology": "m" });
        assert_eq!(result_of(&wrapped), &json!({ "total": "1" }));

        let listing = json!([{ "name": "Mainova GreenHeat" }]);
        assert_eq!(result_of(&listing), &listing);
    }
}
