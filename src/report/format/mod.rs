//! Report formats and the renderers that produce them.
//!
//! Each renderer is a pure function from `(data, options, timestamp)` to a
//! text payload; [`render`] dispatches on the configured [`ReportFormat`].

use crate::errors::{Error, Result};
use crate::report::options::ReportOptions;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

mod csv;
mod html;
mod json;
mod text;

pub(crate) use csv::render_csv;
pub(crate) use html::render_html;
pub(crate) use json::render_json;
pub(crate) use text::render_text;

/// The textual encodings a report can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// Pretty-printed JSON wrapping `{metadata, data, generatedAt}`.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// A styled, self-contained HTML document.
    Html,
    /// A plain-text rendering.
    Text,
}

impl ReportFormat {
    /// The filename extension for this format, without a dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Text => "txt",
        }
    }

    /// The MIME type of the packaged payload.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Html => "text/html",
            Self::Text => "text/plain",
        }
    }

    /// The canonical tag for this format.
    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    /// Parses a format tag, case-insensitively. Unknown tags fail with
    /// [`Error::UnsupportedFormat`].
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Renders the data into the format selected by `options.format`.
pub fn render(data: &Value, options: &ReportOptions, generated_at: DateTime<Utc>) -> Result<String> {
    match options.format {
        ReportFormat::Json => render_json(data, &options.metadata, generated_at),
        ReportFormat::Csv => render_csv(data),
        ReportFormat::Html => render_html(data, &options.metadata, &options.style, generated_at),
        ReportFormat::Text => render_text(data, &options.metadata, generated_at),
    }
}
