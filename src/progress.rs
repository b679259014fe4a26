//! Defines a trait for reporting progress of batch operations.

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};

/// A trait for reporting progress, abstracting over specific implementations
/// like `indicatif` or a plain callback.
///
/// During a batch intake run the session calls `set_length` once with the
/// total item count, then `set_position(index + 1)` after each item settles,
/// so observed positions are `1, 2, ..., N` in strictly increasing order.
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of items to process.
    fn set_length(&self, len: u64);
    /// Sets the current position in the process.
    fn set_position(&self, pos: u64);
    /// Sets a descriptive message for the current operation.
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting.
    fn finish(&self);
}

/// A `ProgressReporter` that does nothing.
///
/// Used as the default when no progress reporting is desired.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
}

/// A `ProgressReporter` that forwards `(position, length)` pairs to a closure.
///
/// This is the callback-style hook from the configuration surface: callers
/// who just want a fraction can compute `position as f64 / length as f64`.
///
/// # Examples
///
/// ```
/// use filedrop::progress::{CallbackProgress, ProgressReporter};
/// use std::sync::Mutex;
///
/// let seen = Mutex::new(Vec::new());
/// let reporter = CallbackProgress::new(|pos, len| {
///     seen.lock().unwrap().push((pos, len));
/// });
/// reporter.set_length(2);
/// reporter.set_position(1);
/// reporter.set_position(2);
/// assert_eq!(*seen.lock().unwrap(), vec![(1, 2), (2, 2)]);
/// ```
pub struct CallbackProgress<F: Fn(u64, u64) + Send + Sync> {
    callback: F,
    length: AtomicU64,
}

impl<F: Fn(u64, u64) + Send + Sync> CallbackProgress<F> {
    /// Wraps a `(position, length)` callback in a reporter.
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            length: AtomicU64::new(0),
        }
    }
}

impl<F: Fn(u64, u64) + Send + Sync> ProgressReporter for CallbackProgress<F> {
    fn set_length(&self, len: u64) {
        self.length.store(len, Ordering::SeqCst);
    }

    fn set_position(&self, pos: u64) {
        (self.callback)(pos, self.length.load(Ordering::SeqCst));
    }

    fn set_message(&self, _msg: String) {}

    fn finish(&self) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar with a default style.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_callback_progress_reports_length() {
        let seen: Mutex<Vec<(u64, u64)>> = Mutex::new(Vec::new());
        let reporter = CallbackProgress::new(|pos, len| seen.lock().unwrap().push((pos, len)));
        reporter.set_length(3);
        reporter.set_position(1);
        reporter.set_position(2);
        reporter.set_position(3);
        assert_eq!(*seen.lock().unwrap(), vec![(1, 3), (2, 3), (3, 3)]);
    }
}
