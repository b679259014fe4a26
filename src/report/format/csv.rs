//! The CSV report renderer.

use crate::errors::{Error, Result};
use serde_json::{Map, Value};

/// Renders an array of records as CSV.
///
/// The header is the union of all keys across all records, in first-seen
/// order. Missing keys and nulls render as empty fields. A field containing
/// a comma, quote, or newline is wrapped in double quotes with internal
/// quotes doubled.
///
/// A lone object is treated as a one-record array; anything else is a
/// generation error, since CSV needs named fields.
pub(crate) fn render_csv(data: &Value) -> Result<String> {
    let records: Vec<&Map<String, Value>> = match data {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_object().ok_or_else(|| {
                    Error::Generation("CSV rows must be records with named fields".to_string())
                })
            })
            .collect::<Result<_>>()?,
        Value::Object(record) => vec![record],
        _ => {
            return Err(Error::Generation(
                "CSV output requires an array of records".to_string(),
            ))
        }
    };

    let mut columns: Vec<&str> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut output = String::new();
    let header: Vec<String> = columns.iter().map(|c| escape_field(c)).collect();
    output.push_str(&header.join(","));
    output.push('\n');

    for record in &records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| escape_field(&field_text(record.get(*column))))
            .collect();
        output.push_str(&row.join(","));
        output.push('\n');
    }

    Ok(output)
}

/// Renders a single field value: strings verbatim, null/missing empty,
/// everything else as compact JSON.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
