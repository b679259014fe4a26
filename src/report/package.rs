//! Derives artifact filenames from report options.

use crate::report::format::ReportFormat;
use chrono::{DateTime, Utc};

/// Derives the artifact filename: sanitized base name, optional sortable
/// timestamp suffix, and the format's extension.
pub(crate) fn derive_filename(
    base_name: &str,
    format: ReportFormat,
    include_timestamp: bool,
    now: DateTime<Utc>,
) -> String {
    let base = sanitize_base(base_name);
    if include_timestamp {
        format!(
            "{base}_{}.{ext}",
            now.format("%Y%m%d_%H%M%S"),
            ext = format.extension()
        )
    } else {
        format!("{base}.{ext}", ext = format.extension())
    }
}

/// Keeps alphanumerics, `-`, `_`, and `.`; everything else becomes `_`.
/// An empty or all-invalid base falls back to `report`.
fn sanitize_base(base_name: &str) -> String {
    let sanitized: String = base_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.chars().all(|c| c == '_' || c == '.') {
        "report".to_string()
    } else {
        sanitized
    }
}
