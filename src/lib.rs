//! # Introduction
//!
//! Tapewind is a reversible, steppable Brainfuck interpreter built as the
//! core of an interactive visual debugger. A host executes one
//! instruction at a time, undoes steps arbitrarily within a bounded
//! history, jumps forward or backward N instructions, and pauses bulk
//! execution wherever it likes — the engine itself is passive,
//! synchronous, and never blocks.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Bracket validator → Jump table → Stepping engine → Host
//! ```
//!
//! 1. [`program`] — the eight-command instruction set and the bracket
//!    matcher, which turns source text into a [`program::JumpTable`] or a
//!    positioned [`program::SyntaxError`].
//! 2. [`interpreter`] — the [`interpreter::Interpreter`] engine: tape,
//!    cursors, dispatch, and the `step`/`back`/`jump` operations.
//! 3. [`history`] — the bounded undo ring of minimal per-step snapshots.
//! 4. [`input`] — the non-blocking [`input::InputSource`] seam and the
//!    escape-decoding [`input::QueuedInput`] provider.
//!
//! ## Instruction set
//!
//! Exactly `[` `]` `>` `<` `+` `-` `,` `.` are commands; every other
//! character is a comment. Cells are bytes with mod-256 wraparound; the
//! tape starts as one zero cell and grows one cell at a time to the
//! right.

pub mod history;
pub mod input;
pub mod interpreter;
pub mod program;
