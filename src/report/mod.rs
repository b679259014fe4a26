//! The report generation facility: rendering, packaging, and the registry.
//!
//! A [`ReportSession`] renders structured data into one of the
//! [`ReportFormat`]s, packages the rendering as a named artifact with a
//! releasable [`DownloadHandle`], and tracks generated artifacts in an
//! in-memory registry. Aggregate numbers over the registry come from
//! [`ReportSession::stats`]; [`ReportSession::clear`] releases every
//! outstanding handle before discarding the entries.

use crate::errors::{Error, ErrorRecord, Result};
use crate::session::{ErrorCallback, SessionState};
use chrono::Utc;
use log::{debug, warn};
use serde_json::Value;
use tempfile::TempDir;

pub mod format;
mod handle;
mod options;
mod package;
mod stats;

pub use format::ReportFormat;
pub use handle::DownloadHandle;
pub use options::{ReportMetadata, ReportOptions, ReportStyle, Theme};
pub use stats::RegistryStats;

/// A generated report artifact tracked by the registry.
#[derive(Debug)]
pub struct GeneratedReport {
    /// Derived filename, including extension.
    pub filename: String,
    /// The rendered payload bytes.
    pub payload: Vec<u8>,
    /// Payload size in bytes.
    pub size: u64,
    /// The format the report was rendered into.
    pub format: ReportFormat,
    /// MIME type of the payload.
    pub mime_type: &'static str,
    /// Transient handle exposing the payload as a downloadable file.
    pub handle: DownloadHandle,
}

/// A stateful report generation session.
///
/// Owns a temporary staging directory for download handles. The state
/// machine and error-slot discipline match [`IntakeSession`]: operations
/// move `Idle -> Busy -> Idle`, failures land in the error slot and the
/// optional callback, and only successful generations enter the registry.
///
/// [`IntakeSession`]: crate::intake::IntakeSession
///
/// # Examples
///
/// ```
/// use filedrop::report::{ReportFormat, ReportOptions, ReportSession};
/// use serde_json::json;
///
/// let mut session = ReportSession::new().unwrap();
/// let options = ReportOptions::default()
///     .base_name("inventory")
///     .format(ReportFormat::Csv)
///     .include_timestamp(false);
///
/// let report = session
///     .generate(&json!([{"item": "bolt", "qty": 40}]), &options)
///     .unwrap();
/// assert_eq!(report.filename, "inventory.csv");
///
/// let stats = session.stats();
/// assert_eq!(stats.count, 1);
/// session.clear();
/// assert!(session.reports().is_empty());
/// ```
pub struct ReportSession {
    staging: TempDir,
    reports: Vec<GeneratedReport>,
    last_error: Option<ErrorRecord>,
    on_error: Option<ErrorCallback>,
    state: SessionState,
}

impl ReportSession {
    /// Creates a session with a fresh staging directory.
    ///
    /// # Errors
    /// Returns [`Error::Generation`] if the staging directory cannot be
    /// created.
    pub fn new() -> Result<Self> {
        let staging = tempfile::Builder::new()
            .prefix("filedrop-reports-")
            .tempdir()
            .map_err(|e| Error::Generation(format!("failed to create staging directory: {e}")))?;
        Ok(Self {
            staging,
            reports: Vec::new(),
            last_error: None,
            on_error: None,
            state: SessionState::Idle,
        })
    }

    /// Installs a callback fired with a structured record on every failure.
    pub fn with_error_callback(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    /// Renders, packages, and registers a report.
    ///
    /// On success the artifact is appended to the registry and returned by
    /// reference. On failure the registry is untouched, the error slot is
    /// set, and the callback (if any) fires.
    ///
    /// # Errors
    /// Returns [`Error::Generation`] when rendering or staging fails.
    pub fn generate(&mut self, data: &Value, options: &ReportOptions) -> Result<&GeneratedReport> {
        self.state = SessionState::Busy;
        let result = self.generate_inner(data, options);
        self.state = SessionState::Idle;

        match result {
            Ok(report) => {
                self.last_error = None;
                debug!(
                    "generated {} report '{}' ({} bytes)",
                    report.format, report.filename, report.size
                );
                self.reports.push(report);
                // Just pushed, so the registry is non-empty.
                Ok(self.reports.last().expect("registry is non-empty"))
            }
            Err(err) => {
                let record = ErrorRecord::from_error(&err);
                if let Some(ref callback) = self.on_error {
                    callback(&record);
                }
                self.last_error = Some(record);
                Err(err)
            }
        }
    }

    fn generate_inner(&self, data: &Value, options: &ReportOptions) -> Result<GeneratedReport> {
        let generated_at = Utc::now();
        let rendered = format::render(data, options, generated_at)?;
        let payload = rendered.into_bytes();
        let filename = package::derive_filename(
            &options.base_name,
            options.format,
            options.include_timestamp,
            generated_at,
        );
        let handle = DownloadHandle::stage(self.staging.path(), &payload)?;
        Ok(GeneratedReport {
            filename,
            size: payload.len() as u64,
            format: options.format,
            mime_type: options.format.mime_type(),
            payload,
            handle,
        })
    }

    /// The reports generated so far, in generation order.
    pub fn reports(&self) -> &[GeneratedReport] {
        &self.reports
    }

    /// Computes aggregate statistics over the registry.
    pub fn stats(&self) -> RegistryStats {
        stats::registry_stats(&self.reports)
    }

    /// Releases every outstanding download handle, then discards the
    /// registry entries.
    ///
    /// A handle that fails to release is logged and skipped; the registry
    /// is emptied regardless.
    pub fn clear(&mut self) {
        for report in &mut self.reports {
            if let Err(e) = report.handle.release() {
                warn!("could not release handle for '{}': {e}", report.filename);
            }
        }
        self.reports.clear();
        self.last_error = None;
    }

    /// The error recorded by the most recent failed operation, if any.
    pub fn last_error(&self) -> Option<&ErrorRecord> {
        self.last_error.as_ref()
    }

    /// The session's observable state.
    pub fn state(&self) -> SessionState {
        self.state
    }
}
