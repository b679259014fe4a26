//! The input boundary: abstractions over candidate files.
//!
//! Intake operates on the [`FileSource`] trait so that validation and
//! processing are decoupled from where bytes actually live. [`DiskSource`]
//! backs a source with a filesystem path; [`MemorySource`] holds bytes
//! in memory and is handy for tests and programmatic callers.

use crate::errors::{io_error_with_path, Error, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// A candidate file: named, sized, typed, and content-accessible.
pub trait FileSource {
    /// The file name (no directory components).
    fn name(&self) -> &str;
    /// The size in bytes, as known before any content read.
    fn size(&self) -> u64;
    /// The MIME type, e.g. `text/plain`.
    fn mime_type(&self) -> &str;
    /// The last-modified timestamp, when the backing store knows one.
    fn last_modified(&self) -> Option<DateTime<Utc>>;
    /// Reads the full content.
    fn read_bytes(&self) -> Result<Vec<u8>>;
}

/// A [`FileSource`] backed by a path on disk.
///
/// Metadata (size, modification time) is captured once at `open` time; the
/// MIME type is guessed from the file extension.
///
/// # Examples
///
/// ```
/// use filedrop::source::{DiskSource, FileSource};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("notes.txt");
/// fs::write(&path, "hello").unwrap();
///
/// let source = DiskSource::open(&path).unwrap();
/// assert_eq!(source.name(), "notes.txt");
/// assert_eq!(source.size(), 5);
/// assert_eq!(source.mime_type(), "text/plain");
/// ```
#[derive(Debug, Clone)]
pub struct DiskSource {
    path: PathBuf,
    name: String,
    size: u64,
    mime_type: String,
    last_modified: Option<DateTime<Utc>>,
}

impl DiskSource {
    /// Opens a path and captures its metadata.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the path does not exist or its metadata
    /// cannot be read, and [`Error::Processing`] if it is not a regular file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| io_error_with_path(e, path))?;
        if !metadata.is_file() {
            return Err(Error::Processing {
                file: path.display().to_string(),
                reason: "not a regular file".to_string(),
            });
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        let last_modified = metadata.modified().ok().map(DateTime::<Utc>::from);
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            mime_type,
            last_modified,
        })
    }

    /// The path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileSource for DiskSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| io_error_with_path(e, &self.path))
    }
}

/// A [`FileSource`] holding its bytes in memory.
///
/// Primarily for tests and callers that already have content in hand. A
/// read error can be injected with [`MemorySource::with_read_error`] to
/// exercise failure paths.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
    last_modified: Option<DateTime<Utc>>,
    read_error: Option<String>,
}

impl MemorySource {
    /// Creates an in-memory source from a name, MIME type, and content.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
            last_modified: None,
            read_error: None,
        }
    }

    /// Sets the last-modified timestamp.
    pub fn with_last_modified(mut self, timestamp: DateTime<Utc>) -> Self {
        self.last_modified = Some(timestamp);
        self
    }

    /// Makes every `read_bytes` call fail with the given reason.
    pub fn with_read_error(mut self, reason: impl Into<String>) -> Self {
        self.read_error = Some(reason.into());
        self
    }
}

impl FileSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        match &self.read_error {
            Some(reason) => Err(Error::Processing {
                file: self.name.clone(),
                reason: reason.clone(),
            }),
            None => Ok(self.bytes.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_disk_source_metadata() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("report.csv");
        fs::write(&path, "a,b\n1,2\n")?;

        let source = DiskSource::open(&path)?;
        assert_eq!(source.name(), "report.csv");
        assert_eq!(source.size(), 8);
        assert_eq!(source.mime_type(), "text/csv");
        assert!(source.last_modified().is_some());
        assert_eq!(source.read_bytes()?, b"a,b\n1,2\n");
        Ok(())
    }

    #[test]
    fn test_disk_source_missing_file() {
        let result = DiskSource::open("no_such_file_for_filedrop_tests.txt");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_disk_source_rejects_directory() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = DiskSource::open(temp.path());
        assert!(matches!(result, Err(Error::Processing { .. })));
        Ok(())
    }

    #[test]
    fn test_disk_source_unknown_extension_falls_back() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("blob.zzz9");
        fs::write(&path, "x")?;
        let source = DiskSource::open(&path)?;
        assert_eq!(source.mime_type(), "application/octet-stream");
        Ok(())
    }

    #[test]
    fn test_memory_source_injected_read_error() {
        let source = MemorySource::new("a.txt", "text/plain", "abc").with_read_error("boom");
        assert_eq!(source.size(), 3);
        let err = source.read_bytes().unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
