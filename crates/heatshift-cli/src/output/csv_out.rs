use serde_json::Value;
use std::io;

use super::{flatten, result_of};

/// Listings become one CSV row per record; a computation result becomes
/// `field,value` pairs with dotted keys.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Err(e) = write_csv(&mut wtr, result_of(value)) {
        eprintln!("CSV write error: {e}");
    }
    let _ = wtr.flush();
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    match value {
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let rows: Vec<Vec<(String, String)>> = items
                .iter()
                .map(|item| {
                    let mut row = Vec::new();
                    flatten("", item, &mut row);
                    row
                })
                .collect();

            let mut headers: Vec<String> = Vec::new();
            for (key, _) in rows.iter().flatten() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            if headers.is_empty() {
                return Ok(());
            }

            wtr.write_record(&headers)?;
            for row in &rows {
                let record: Vec<&str> = headers
                    .iter()
                    .map(|h| {
                        row.iter()
                            .find(|(k, _)| k == h)
                            .map(|(_, v)| v.as_str())
                            .unwrap_or("")
                    })
                    .collect();
                wtr.write_record(&record)?;
            }
        }
        _ => {
            let mut rows = Vec::new();
            flatten("", value, &mut rows);
            wtr.write_record(["field", "value"])?;
            for (key, val) in &rows {
                wtr.write_record([key.as_str(), val.as_str()])?;
            }
        }
    }
    Ok(())
}
