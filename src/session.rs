//! Shared session plumbing: the state machine and error-slot discipline
//! common to intake and report sessions.

use crate::errors::ErrorRecord;

/// Observable state of a session.
///
/// Sessions move `Idle -> Busy -> Idle`; the outcome of the last operation
/// lands in the session's error slot (failure) or its accumulated list
/// (success), never in a durable intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No operation in flight.
    #[default]
    Idle,
    /// An operation is in flight.
    Busy,
}

/// Callback invoked with a structured record each time an operation fails.
pub type ErrorCallback = Box<dyn Fn(&ErrorRecord) + Send + Sync>;
