//! Transient download handles backing generated artifacts.

use crate::errors::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A transient, revocable reference exposing an artifact's bytes as a
/// downloadable resource.
///
/// Staging writes the payload to a uuid-named file in the session's staging
/// directory. The handle must be explicitly released when no longer needed;
/// otherwise the staged file lingers for the life of the session. `Drop`
/// removes the file as a best-effort safety net, but explicit release is
/// the contract.
#[derive(Debug)]
pub struct DownloadHandle {
    id: Uuid,
    path: PathBuf,
    released: bool,
}

impl DownloadHandle {
    /// Stages a payload in `dir` and returns the handle to it.
    pub(crate) fn stage(dir: &Path, payload: &[u8]) -> Result<Self> {
        let id = Uuid::new_v4();
        let path = dir.join(id.to_string());
        fs::write(&path, payload).map_err(|e| {
            Error::Generation(format!(
                "failed to stage artifact at '{}': {e}",
                path.display()
            ))
        })?;
        debug!("staged artifact {} ({} bytes)", path.display(), payload.len());
        Ok(Self {
            id,
            path,
            released: false,
        })
    }

    /// The handle's unique id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The staged file's path, or `None` once the handle is released.
    pub fn path(&self) -> Option<&Path> {
        if self.released {
            None
        } else {
            Some(&self.path)
        }
    }

    /// Whether the handle has been released.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Releases the handle, deleting the staged file. Idempotent.
    ///
    /// # Errors
    /// Returns [`Error::Generation`] if the staged file exists but cannot
    /// be removed. A file that is already gone counts as released.
    pub fn release(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(Error::Generation(format!(
                    "failed to release artifact '{}': {e}",
                    self.path.display()
                )))
            }
        }
        self.released = true;
        Ok(())
    }
}

impl Drop for DownloadHandle {
    fn drop(&mut self) {
        if !self.released {
            let _ = fs::remove_file(&self.path);
        }
    }
}
