//! Runtime error types for the stepping engine
//!
//! This module defines [`RuntimeError`], which represents all failures
//! that can occur while stepping (as opposed to the structural
//! [`SyntaxError`](crate::program::SyntaxError) found before execution).
//!
//! No runtime error corrupts engine state: a failed `step()` leaves the
//! cursors, tape, and output exactly as they were, so the caller can
//! retry, roll back, or reset.

use std::fmt;

/// Failures reported by `step()` and `back()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    /// `step()` called with no instructions remaining. Recoverable only
    /// by `back()` or a reset.
    ExecutionEnded,

    /// `,` polled the input provider and nothing was available. The step
    /// was fully rolled back; supply input and retry.
    NoInput,

    /// `<` would have driven the tape pointer below zero. Carries the
    /// source position of the offending instruction. The step was fully
    /// rolled back.
    InvalidTapeCell { position: usize },

    /// `back()` called with an empty history.
    NoPreviousExecution,
}

impl RuntimeError {
    /// Source position of the offending instruction, for host
    /// highlighting, where one applies.
    pub fn position(&self) -> Option<usize> {
        match self {
            RuntimeError::InvalidTapeCell { position } => Some(*position),
            RuntimeError::ExecutionEnded
            | RuntimeError::NoInput
            | RuntimeError::NoPreviousExecution => None,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::ExecutionEnded => {
                write!(f, "Execution has ended; no instructions remain")
            }
            RuntimeError::NoInput => {
                write!(f, "No input available for ','")
            }
            RuntimeError::InvalidTapeCell { position } => {
                write!(f, "Tape pointer out of bounds at position {}", position)
            }
            RuntimeError::NoPreviousExecution => {
                write!(f, "No previous execution to step back to")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
