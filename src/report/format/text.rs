//! The plain-text report renderer.

use crate::errors::{Error, Result};
use crate::report::options::ReportMetadata;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt::Write;

/// Renders a plain-text report: title with underline, description,
/// generation timestamp, author, then the data.
///
/// Array input becomes a numbered per-record `key: value` listing; anything
/// else is dumped as pretty-printed JSON.
pub(crate) fn render_text(
    data: &Value,
    metadata: &ReportMetadata,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let mut output = String::new();
    output.push_str(&metadata.title);
    output.push('\n');
    output.push_str(&"=".repeat(metadata.title.chars().count()));
    output.push_str("\n\n");

    if let Some(ref description) = metadata.description {
        output.push_str(description);
        output.push_str("\n\n");
    }

    let _ = writeln!(output, "Generated: {}", generated_at.to_rfc3339());
    if let Some(ref author) = metadata.author {
        let _ = writeln!(output, "Author: {author}");
    }
    output.push('\n');

    match data {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let _ = writeln!(output, "Record {}:", index + 1);
                match item.as_object() {
                    Some(record) => {
                        for (key, value) in record {
                            let _ = writeln!(output, "  {key}: {}", scalar_text(value));
                        }
                    }
                    None => {
                        let _ = writeln!(output, "  {}", scalar_text(item));
                    }
                }
                output.push('\n');
            }
        }
        other => {
            let pretty =
                serde_json::to_string_pretty(other).map_err(|e| Error::Generation(e.to_string()))?;
            output.push_str(&pretty);
            output.push('\n');
        }
    }

    Ok(output)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
