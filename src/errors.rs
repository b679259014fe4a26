//! Defines library-specific error types.
//!
//! This module provides the [`Error`] enum, which categorizes the failures
//! that can occur during file intake and report generation, and the
//! [`ErrorRecord`] struct, a flattened projection of an error suitable for
//! storing in a session's error slot or handing to an error callback.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the intake and report facilities.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A candidate file failed one of the configured validation rules.
    #[error("validation failed for '{file}': {violation}")]
    Validation {
        /// Name of the offending file.
        file: String,
        /// The rule that rejected the file.
        violation: RuleViolation,
    },

    /// A validated file could not be read or decoded.
    #[error("failed to process '{file}': {reason}")]
    Processing {
        /// Name of the file being processed.
        file: String,
        /// Human-readable description of the failure.
        reason: String,
    },

    /// The in-flight operation was cancelled via a [`CancellationToken`].
    ///
    /// [`CancellationToken`]: crate::CancellationToken
    #[error("operation cancelled")]
    Cancelled,

    /// Report rendering or artifact staging failed.
    #[error("report generation failed: {0}")]
    Generation(String),

    /// A format tag did not name one of the supported report formats.
    #[error("unsupported report format '{0}'")]
    UnsupportedFormat(String),
}

/// Identifies which validation rule rejected a file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// The file exceeds the configured maximum size.
    #[error("size {size} exceeds the maximum of {max} bytes")]
    TooLarge {
        /// Actual file size in bytes.
        size: u64,
        /// Configured maximum in bytes.
        max: u64,
    },
    /// The file is below the configured minimum size.
    #[error("size {size} is below the minimum of {min} bytes")]
    TooSmall {
        /// Actual file size in bytes.
        size: u64,
        /// Configured minimum in bytes.
        min: u64,
    },
    /// The file's MIME type is not in the allow-list.
    #[error("MIME type '{0}' is not allowed")]
    MimeNotAllowed(String),
    /// The file's extension is not in the allow-list.
    #[error("extension '{0}' is not allowed")]
    ExtensionNotAllowed(String),
    /// An extension allow-list is configured but the file name has none.
    #[error("file name has no extension")]
    MissingExtension,
    /// A custom rule rejected the file.
    #[error("rule '{rule}' rejected the file: {reason}")]
    Custom {
        /// Name of the custom rule.
        rule: String,
        /// Reason reported by the rule.
        reason: String,
    },
}

/// Machine-readable error category carried by an [`ErrorRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The input failed a rule before any content was read.
    Validation,
    /// Failure during read, decode, or digest (including cancellation).
    Processing,
    /// Failure during report rendering or artifact staging.
    Generation,
}

impl ErrorCode {
    /// Returns the wire-style string form of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Processing => "PROCESSING_ERROR",
            Self::Generation => "GENERATION_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Maps the error onto its machine-readable category.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::Validation,
            Self::Io { .. } | Self::Processing { .. } | Self::Cancelled => ErrorCode::Processing,
            Self::Generation(_) | Self::UnsupportedFormat(_) => ErrorCode::Generation,
        }
    }
}

/// A structured, owned snapshot of an error.
///
/// Records are what a session stores in its error slot and passes to the
/// optional error callback. They are plain values, never panics, and never
/// cross the public boundary as anything but data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Machine-readable category.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Name of the originating file, when one is involved.
    pub file: Option<String>,
    /// Underlying detail (e.g. the source I/O error), when available.
    pub detail: Option<String>,
}

impl ErrorRecord {
    /// Builds a record from an [`Error`], extracting the originating file
    /// name and underlying detail where the variant carries them.
    pub fn from_error(err: &Error) -> Self {
        let file = match err {
            Error::Validation { file, .. } | Error::Processing { file, .. } => {
                Some(file.clone())
            }
            Error::Io { path, .. } => Some(path.clone()),
            _ => None,
        };
        let detail = match err {
            Error::Io { source, .. } => Some(source.to_string()),
            Error::Validation { violation, .. } => Some(violation.to_string()),
            _ => None,
        };
        Self {
            code: err.code(),
            message: err.to_string(),
            file,
            detail,
        }
    }
}

/// Helper to create an [`Error::Io`] with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
