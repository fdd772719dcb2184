use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{flatten, join_key, result_of, scalar};

/// Scalars go into one Field/Value table; every array of objects (the
/// stacked incentives, financing options, catalog listings) gets its own.
pub fn print_table(value: &Value) {
    let result = result_of(value);

    match result {
        Value::Array(items) => print_rows(None, items),
        Value::Object(_) => {
            let mut fields = Vec::new();
            let mut sections = Vec::new();
            split("", result, &mut fields, &mut sections);

            if !fields.is_empty() {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, val) in &fields {
                    builder.push_record([key.as_str(), val.as_str()]);
                }
                println!("{}", Table::from(builder));
            }
            for (title, items) in sections {
                print_rows(Some(title.as_str()), items);
            }
        }
        other => println!("{}", scalar(other)),
    }

    if let Some(envelope) = value.as_object() {
        print_footer(envelope);
    }
}

fn split<'a>(
    prefix: &str,
    value: &'a Value,
    fields: &mut Vec<(String, String)>,
    sections: &mut Vec<(String, &'a [Value])>,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                split(&join_key(prefix, key), val, fields, sections);
            }
        }
        Value::Array(items) if items.iter().any(Value::is_object) => {
            sections.push((prefix.to_string(), items.as_slice()));
        }
        _ => fields.push((prefix.to_string(), scalar(value))),
    }
}

fn print_rows(title: Option<&str>, items: &[Value]) {
    if let Some(title) = title {
        println!("\n{title}:");
    }
    if items.is_empty() {
        println!("(empty)");
        return;
    }

    let rows: Vec<Vec<(String, String)>> = items
        .iter()
        .map(|item| {
            let mut row = Vec::new();
            flatten("", item, &mut row);
            row
        })
        .collect();

    // Union of keys in first-seen order; rows may differ (optional fields).
    let mut headers: Vec<String> = Vec::new();
    for (key, _) in rows.iter().flatten() {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(String::as_str));
    for row in &rows {
        builder.push_record(headers.iter().map(|h| {
            row.iter()
                .find(|(k, _)| k == h)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        }));
    }
    println!("{}", Table::from(builder));
}

fn print_footer(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {s}");
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {meth}");
    }
}
