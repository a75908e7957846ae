//! Stepping interpreter engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the reversible, instruction-at-a-time interpreter
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! The engine executes exactly one recognized instruction per `step()`,
//! snapshotting just enough state beforehand to undo it with `back()`.
//! It is driven entirely by the caller; run loops, pacing, pausing, and
//! breakpoints are host concerns built from the two primitives.

pub mod engine;
pub mod errors;

pub use engine::Interpreter;
pub use errors::RuntimeError;
