//! `filedrop` is a library for taking in user-supplied files and turning
//! structured data into downloadable report artifacts.
//!
//! It provides two independent facilities:
//!
//! 1. **File intake** — validate a candidate file against a configurable
//!    rule set (size bounds, MIME and extension allow-lists, custom rules),
//!    read its content as text, compute character/word/line counts and an
//!    optional SHA-256 digest, and accumulate the results in a session.
//! 2. **Report generation** — render arbitrary `serde_json::Value` data
//!    into JSON, CSV, HTML, or plain text, package the rendering as a named
//!    artifact with a releasable download handle, and track artifacts in a
//!    registry with aggregate statistics.
//!
//! Processing is strictly sequential and cooperatively cancellable; one
//! item's failure never halts a batch, and failures are reported as
//! structured [`ErrorRecord`] values rather than panics.
//!
//! # Example
//!
//! ```
//! use filedrop::{
//!     CancellationToken, IntakeSession, ProcessingOptions, ReportFormat,
//!     ReportOptions, ReportSession, ValidationRules,
//! };
//! use filedrop::source::MemorySource;
//! use serde_json::json;
//!
//! // 1. Take in a file, enforcing an extension allow-list.
//! let rules = ValidationRules::default().allowed_extensions(["txt", "md"]);
//! let mut intake = IntakeSession::new(rules, ProcessingOptions::default());
//!
//! let file = MemorySource::new("notes.txt", "text/plain", "alpha beta\ngamma\n");
//! let processed = intake.process(&file, &CancellationToken::new()).unwrap();
//! assert_eq!(processed.counts.unwrap().words, 3);
//!
//! // 2. Generate a CSV report from structured data.
//! let mut reports = ReportSession::new().unwrap();
//! let options = ReportOptions::default()
//!     .base_name("word_counts")
//!     .format(ReportFormat::Csv)
//!     .include_timestamp(false);
//!
//! let report = reports
//!     .generate(&json!([{"file": "notes.txt", "words": 3}]), &options)
//!     .unwrap();
//! assert_eq!(report.filename, "word_counts.csv");
//!
//! // 3. Release the staged artifacts when done.
//! reports.clear();
//! ```

pub mod cancellation;
pub mod errors;
pub mod intake;
pub mod progress;
pub mod report;
pub mod session;
pub mod source;

// Re-export key public types for easier use as a library.
pub use cancellation::CancellationToken;
pub use errors::{Error, ErrorCode, ErrorRecord, Result, RuleViolation};
pub use intake::{
    count_text, hex_digest, BatchOutcome, CustomRule, IntakeSession, ProcessedFile,
    ProcessingOptions, TextCounts, TextEncoding, ValidationRules,
};
pub use progress::{NoOpProgress, ProgressReporter};
pub use report::{
    DownloadHandle, GeneratedReport, RegistryStats, ReportFormat, ReportMetadata, ReportOptions,
    ReportSession, ReportStyle, Theme,
};
pub use session::SessionState;
pub use source::{DiskSource, FileSource, MemorySource};
