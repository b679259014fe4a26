//! The file intake facility: validation, content processing, and session
//! bookkeeping.
//!
//! An [`IntakeSession`] accepts candidate files one at a time (or as a
//! strictly sequential batch), checks them against a [`ValidationRules`]
//! set, reads and decodes their content, computes counts and an optional
//! SHA-256 digest, and accumulates the resulting [`ProcessedFile`] records.
//! Failures never land in the processed list; they are captured in the
//! session's error slot and reported through the optional error callback.

use crate::cancellation::CancellationToken;
use crate::errors::{Error, ErrorRecord, Result};
use crate::progress::ProgressReporter;
use crate::session::{ErrorCallback, SessionState};
use crate::source::FileSource;
use chrono::{DateTime, Utc};
use log::debug;

mod counter;
mod digest;
mod reader;
pub mod rules;
mod validator;

pub use counter::{count_text, TextCounts};
pub use digest::hex_digest;
pub use reader::TextEncoding;
pub use rules::{CustomRule, ValidationRules};
pub use validator::validate;

/// Options controlling the processing stage.
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Encoding used to decode file content. Defaults to strict UTF-8.
    pub encoding: TextEncoding,
    /// Whether to compute character/word/line counts. Defaults to `true`.
    pub collect_counts: bool,
    /// Whether to compute a SHA-256 content digest. Defaults to `false`.
    pub compute_digest: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            collect_counts: true,
            compute_digest: false,
        }
    }
}

impl ProcessingOptions {
    /// Sets the content encoding.
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Enables or disables count collection.
    pub fn collect_counts(mut self, enabled: bool) -> Self {
        self.collect_counts = enabled;
        self
    }

    /// Enables or disables digest computation.
    pub fn compute_digest(mut self, enabled: bool) -> Self {
        self.compute_digest = enabled;
        self
    }
}

/// A successfully validated and processed file.
///
/// Immutable once constructed; appended to the session's list as processing
/// succeeds.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    /// The file name.
    pub name: String,
    /// Size in bytes, as reported by the source before the read.
    pub size: u64,
    /// MIME type reported by the source.
    pub mime_type: String,
    /// Last-modified timestamp, when the source knew one.
    pub last_modified: Option<DateTime<Utc>>,
    /// The full decoded content.
    pub content: String,
    /// Label of the encoding the content was decoded under.
    pub encoding: &'static str,
    /// Character/word/line counts, when count collection was enabled.
    pub counts: Option<TextCounts>,
    /// Lowercase hex SHA-256 digest, when digest computation was enabled.
    pub digest: Option<String>,
}

/// Outcome of a sequential batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Number of files that were processed and appended to the session list.
    pub succeeded: usize,
    /// One record per failed item, in encounter order.
    pub failed: Vec<ErrorRecord>,
    /// `true` if the batch stopped early due to cancellation.
    pub cancelled: bool,
}

/// A stateful intake session.
///
/// Holds the rule set, processing options, the accumulated list of
/// processed files, and the transient error slot. The observable state
/// moves `Idle -> Busy -> Idle`; the busy flag is restored on every exit
/// path, including failures.
///
/// # Examples
///
/// ```
/// use filedrop::{IntakeSession, ProcessingOptions, ValidationRules};
/// use filedrop::source::MemorySource;
/// use filedrop::CancellationToken;
///
/// let mut session = IntakeSession::new(
///     ValidationRules::default(),
///     ProcessingOptions::default().compute_digest(true),
/// );
/// let file = MemorySource::new("notes.txt", "text/plain", "one two\nthree\n");
///
/// let processed = session.process(&file, &CancellationToken::new()).unwrap();
/// assert_eq!(processed.counts.unwrap().words, 3);
/// assert!(processed.digest.is_some());
/// assert_eq!(session.processed().len(), 1);
/// ```
pub struct IntakeSession {
    rules: ValidationRules,
    options: ProcessingOptions,
    processed: Vec<ProcessedFile>,
    last_error: Option<ErrorRecord>,
    on_error: Option<ErrorCallback>,
    state: SessionState,
}

impl IntakeSession {
    /// Creates a session with the given rules and options.
    pub fn new(rules: ValidationRules, options: ProcessingOptions) -> Self {
        Self {
            rules,
            options,
            processed: Vec::new(),
            last_error: None,
            on_error: None,
            state: SessionState::Idle,
        }
    }

    /// Installs a callback fired with a structured record on every failure.
    pub fn with_error_callback(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    /// Validates and processes a single candidate file.
    ///
    /// On success the resulting [`ProcessedFile`] is appended to the session
    /// list and returned by reference; on failure the list is untouched, the
    /// error slot is set, and the callback (if any) fires.
    ///
    /// # Errors
    /// [`Error::Validation`] when a rule rejects the file,
    /// [`Error::Cancelled`] when the token was signalled, or a processing
    /// error from the read or decode.
    pub fn process(
        &mut self,
        file: &dyn FileSource,
        token: &CancellationToken,
    ) -> Result<&ProcessedFile> {
        self.state = SessionState::Busy;
        let result = process_one(file, &self.rules, &self.options, token);
        self.state = SessionState::Idle;

        match result {
            Ok(processed) => {
                self.last_error = None;
                self.processed.push(processed);
                // Just pushed, so the list is non-empty.
                Ok(self.processed.last().expect("processed list is non-empty"))
            }
            Err(err) => {
                self.record_failure(&err);
                Err(err)
            }
        }
    }

    /// Processes a batch of files strictly sequentially, in order.
    ///
    /// One item's failure does not halt the batch: the failure is recorded
    /// (error slot, callback, and the returned outcome) and processing moves
    /// to the next item. Progress is reported as `index + 1` of the total
    /// after each item settles, so positions are monotonic and exact.
    /// Cancellation stops the batch at the next item boundary.
    pub fn process_batch(
        &mut self,
        files: &[Box<dyn FileSource>],
        progress: &dyn ProgressReporter,
        token: &CancellationToken,
    ) -> BatchOutcome {
        let total = files.len() as u64;
        let mut outcome = BatchOutcome::default();

        self.state = SessionState::Busy;
        progress.set_length(total);

        for (index, file) in files.iter().enumerate() {
            if token.is_cancelled() {
                debug!("batch cancelled before item {}", index + 1);
                self.record_failure(&Error::Cancelled);
                outcome.cancelled = true;
                break;
            }

            debug!("processing file {}/{}: {}", index + 1, total, file.name());
            match process_one(file.as_ref(), &self.rules, &self.options, token) {
                Ok(processed) => {
                    self.processed.push(processed);
                    outcome.succeeded += 1;
                }
                Err(Error::Cancelled) => {
                    self.record_failure(&Error::Cancelled);
                    outcome.cancelled = true;
                    break;
                }
                Err(err) => {
                    let record = self.record_failure(&err);
                    outcome.failed.push(record);
                }
            }
            progress.set_position(index as u64 + 1);
        }

        progress.finish();
        self.state = SessionState::Idle;
        outcome
    }

    /// The files processed so far, in the order they succeeded.
    pub fn processed(&self) -> &[ProcessedFile] {
        &self.processed
    }

    /// The error recorded by the most recent failed operation, if any.
    pub fn last_error(&self) -> Option<&ErrorRecord> {
        self.last_error.as_ref()
    }

    /// The session's observable state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Clears the error slot.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Discards all processed files and clears the error slot.
    pub fn clear(&mut self) {
        self.processed.clear();
        self.last_error = None;
    }

    fn record_failure(&mut self, err: &Error) -> ErrorRecord {
        let record = ErrorRecord::from_error(err);
        if let Some(ref callback) = self.on_error {
            callback(&record);
        }
        self.last_error = Some(record.clone());
        record
    }
}

/// Runs the validate/read/decode/count/digest pipeline for one file.
fn process_one(
    file: &dyn FileSource,
    rules: &ValidationRules,
    options: &ProcessingOptions,
    token: &CancellationToken,
) -> Result<ProcessedFile> {
    validator::validate(file, rules)?;

    if token.is_cancelled() {
        return Err(Error::Cancelled);
    }
    let bytes = file.read_bytes()?;
    // The read has settled; a cancellation that arrived while it ran turns
    // into an error rather than a partial result.
    if token.is_cancelled() {
        return Err(Error::Cancelled);
    }

    let content = reader::decode_text(bytes, options.encoding, file.name())?;
    let counts = options.collect_counts.then(|| count_text(&content));
    let digest = options.compute_digest.then(|| hex_digest(&content));

    Ok(ProcessedFile {
        name: file.name().to_string(),
        size: file.size(),
        mime_type: file.mime_type().to_string(),
        last_modified: file.last_modified(),
        encoding: options.encoding.label(),
        content,
        counts,
        digest,
    })
}
