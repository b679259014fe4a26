//! Provides a token-based mechanism for cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A token that signals cancellation to an in-flight intake operation.
///
/// Cancellation is cooperative and coarse-grained: the intake session checks
/// the token at item boundaries and again after each content read settles. A
/// read observed as cancelled surfaces as [`Error::Cancelled`] rather than a
/// partial result.
///
/// The token is a cloneable, thread-safe wrapper around an `Arc<AtomicBool>`,
/// so a UI or signal handler can hold one clone while the session holds
/// another.
///
/// [`Error::Cancelled`]: crate::errors::Error::Cancelled
///
/// # Examples
///
/// ```
/// use filedrop::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new token in a non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Signals cancellation.
    ///
    /// All subsequent calls to `is_cancelled()` on this token or any of its
    /// clones will return `true`.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Checks whether `cancel()` has been called on this token or a clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
