//! Configuration for report generation: format choice, metadata, styling.

use crate::report::format::ReportFormat;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Options for a single report generation call.
///
/// All fields have defaults; construct with [`ReportOptions::default`] and
/// override with the fluent setters.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Base name for the generated filename. Defaults to `"report"`.
    pub base_name: String,
    /// Output format. Defaults to JSON.
    pub format: ReportFormat,
    /// Metadata block rendered into the report.
    pub metadata: ReportMetadata,
    /// Styling block, used by the HTML format.
    pub style: ReportStyle,
    /// Whether to append a sortable timestamp suffix to the filename.
    /// Defaults to `true`.
    pub include_timestamp: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            base_name: "report".to_string(),
            format: ReportFormat::Json,
            metadata: ReportMetadata::default(),
            style: ReportStyle::default(),
            include_timestamp: true,
        }
    }
}

impl ReportOptions {
    /// Sets the filename base.
    pub fn base_name(mut self, name: impl Into<String>) -> Self {
        self.base_name = name.into();
        self
    }

    /// Sets the output format.
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the metadata block.
    pub fn metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Sets the styling block.
    pub fn style(mut self, style: ReportStyle) -> Self {
        self.style = style;
        self
    }

    /// Enables or disables the filename timestamp suffix.
    pub fn include_timestamp(mut self, enabled: bool) -> Self {
        self.include_timestamp = enabled;
        self
    }
}

/// Descriptive metadata embedded in a generated report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Report title. Defaults to `"Report"`.
    pub title: String,
    /// Optional free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional author name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Optional creation timestamp of the underlying data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Optional version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Free-form tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            title: "Report".to_string(),
            description: None,
            author: None,
            created_at: None,
            version: None,
            tags: Vec::new(),
        }
    }
}

impl ReportMetadata {
    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.created_at = Some(timestamp);
        self
    }

    /// Sets the version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the tag list.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Color theme for HTML reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

/// Styling applied to HTML reports.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    /// Base color theme.
    pub theme: Theme,
    /// Accent color for headings and table headers.
    pub primary_color: String,
    /// CSS font-family value.
    pub font_family: String,
    /// CSS font-size value.
    pub font_size: String,
    /// Extra CSS appended verbatim to the style block.
    pub custom_css: Option<String>,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            primary_color: "#2563eb".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            font_size: "14px".to_string(),
            custom_css: None,
        }
    }
}

impl ReportStyle {
    /// Sets the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the accent color.
    pub fn primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }

    /// Sets the font family.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = size.into();
        self
    }

    /// Appends custom CSS to the style block.
    pub fn custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }
}
