//! Bracket matching
//!
//! A single left-to-right pass over the source resolves every `[`/`]`
//! pair before execution starts. Unmatched brackets are construction-time
//! errors carrying the offending source position, never a runtime state.

use rustc_hash::FxHashMap;
use std::fmt;

/// Bidirectional map from each bracket's position to its partner's.
///
/// Invariant: for every entry `(open, close)` there is also `(close, open)`,
/// and `open < close`. Built once per program by [`match_brackets`].
pub type JumpTable = FxHashMap<usize, usize>;

/// Structural errors found while matching brackets
///
/// These are fatal to constructing an engine; the caller must re-validate
/// after any source edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `[` with no matching `]`. Reports the first remaining unmatched
    /// `[` (the outermost one), not the last.
    UnmatchedOpenParen { position: usize },

    /// A `]` with no matching `[`. Reports the position of the `]` itself.
    UnmatchedCloseParen { position: usize },
}

impl SyntaxError {
    /// Source position of the offending bracket, for host highlighting.
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnmatchedOpenParen { position } => *position,
            SyntaxError::UnmatchedCloseParen { position } => *position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnmatchedOpenParen { position } => {
                write!(f, "Unmatched '[' at position {}", position)
            }
            SyntaxError::UnmatchedCloseParen { position } => {
                write!(f, "Unmatched ']' at position {}", position)
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Match every bracket in `program`, producing the jump table.
///
/// Runs in linear time. Non-bracket characters are ignored entirely;
/// whether they are valid commands is irrelevant to this pass.
pub fn match_brackets(program: &[char]) -> Result<JumpTable, SyntaxError> {
    let mut table = JumpTable::default();
    let mut stack: Vec<usize> = Vec::new();

    for (i, &c) in program.iter().enumerate() {
        match c {
            '[' => stack.push(i),
            ']' => match stack.pop() {
                Some(open) => {
                    table.insert(open, i);
                    table.insert(i, open);
                }
                None => return Err(SyntaxError::UnmatchedCloseParen { position: i }),
            },
            _ => {}
        }
    }

    // Bottom of the stack is the first unmatched '[' in source order.
    if let Some(&open) = stack.first() {
        return Err(SyntaxError::UnmatchedOpenParen { position: open });
    }

    Ok(table)
}
