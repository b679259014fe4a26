//! The HTML report renderer.

use crate::errors::{Error, Result};
use crate::report::options::{ReportMetadata, ReportStyle, Theme};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt::Write;

/// Renders a self-contained HTML document.
///
/// Array-of-objects data becomes a table whose columns are the keys of the
/// first element; anything else becomes a pretty-printed JSON block. All
/// interpolated data is HTML-escaped.
pub(crate) fn render_html(
    data: &Value,
    metadata: &ReportMetadata,
    style: &ReportStyle,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let body = render_body(data)?;

    let mut meta_line = format!("Generated: {}", generated_at.to_rfc3339());
    if let Some(ref author) = metadata.author {
        let _ = write!(meta_line, " | Author: {}", escape_html(author));
    }
    if let Some(ref version) = metadata.version {
        let _ = write!(meta_line, " | Version: {}", escape_html(version));
    }

    let description = metadata
        .description
        .as_ref()
        .map(|d| format!("<p class=\"description\">{}</p>\n", escape_html(d)))
        .unwrap_or_default();

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n{css}</style>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         {description}\
         <p class=\"meta\">{meta_line}</p>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape_html(&metadata.title),
        css = style_block(style),
        description = description,
        meta_line = meta_line,
        body = body,
    ))
}

fn render_body(data: &Value) -> Result<String> {
    if let Value::Array(items) = data {
        if let Some(first) = items.first() {
            if let Some(first_record) = first.as_object() {
                let columns: Vec<&String> = first_record.keys().collect();
                return Ok(render_table(&columns, items));
            }
        }
    }
    let pretty = serde_json::to_string_pretty(data).map_err(|e| Error::Generation(e.to_string()))?;
    Ok(format!("<pre>{}</pre>", escape_html(&pretty)))
}

fn render_table(columns: &[&String], items: &[Value]) -> String {
    let mut table = String::from("<table>\n<thead>\n<tr>");
    for column in columns {
        let _ = write!(table, "<th>{}</th>", escape_html(column));
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");

    for item in items {
        table.push_str("<tr>");
        for column in columns {
            let cell = item
                .as_object()
                .and_then(|record| record.get(*column))
                .map(cell_text)
                .unwrap_or_default();
            let _ = write!(table, "<td>{}</td>", escape_html(&cell));
        }
        table.push_str("</tr>\n");
    }

    table.push_str("</tbody>\n</table>");
    table
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn style_block(style: &ReportStyle) -> String {
    let (background, foreground, border) = match style.theme {
        Theme::Light => ("#ffffff", "#1f2937", "#d1d5db"),
        Theme::Dark => ("#111827", "#e5e7eb", "#374151"),
    };
    let mut css = format!(
        "body {{ font-family: {font}; font-size: {size}; margin: 2rem; \
         background: {background}; color: {foreground}; }}\n\
         h1 {{ color: {primary}; }}\n\
         .meta {{ font-size: 0.85em; opacity: 0.8; }}\n\
         table {{ border-collapse: collapse; width: 100%; }}\n\
         th {{ background: {primary}; color: #ffffff; }}\n\
         th, td {{ border: 1px solid {border}; padding: 0.5rem; text-align: left; }}\n",
        font = style.font_family,
        size = style.font_size,
        primary = style.primary_color,
        background = background,
        foreground = foreground,
        border = border,
    );
    if let Some(ref custom) = style.custom_css {
        css.push_str(custom);
        css.push('\n');
    }
    css
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
