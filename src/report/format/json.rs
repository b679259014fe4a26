//! The JSON report renderer.

use crate::errors::{Error, Result};
use crate::report::options::ReportMetadata;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Renders `{metadata, data, generatedAt}` as pretty-printed JSON with
/// 2-space indentation.
///
/// Parsing the output recovers the original `data` and `metadata`
/// substructures unchanged.
pub(crate) fn render_json(
    data: &Value,
    metadata: &ReportMetadata,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let document = json!({
        "metadata": metadata,
        "data": data,
        "generatedAt": generated_at.to_rfc3339(),
    });
    serde_json::to_string_pretty(&document).map_err(|e| Error::Generation(e.to_string()))
}
