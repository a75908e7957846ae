//! The Brainfuck instruction set
//!
//! Exactly eight characters are commands; every other character is a
//! comment. The set is closed, so dispatch is a [`Command`] enum and a
//! `match` rather than a runtime command table.

/// The characters recognized as commands, in no particular order.
///
/// Exposed for hosts that highlight source text: anything not in this
/// table renders as a comment.
pub const COMMAND_CHARS: [char; 8] = ['[', ']', '>', '<', '+', '-', ',', '.'];

/// A single executable instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `[` — jump past the matching `]` if the current cell is zero
    OpenLoop,
    /// `]` — jump back to the matching `[` if the current cell is non-zero
    CloseLoop,
    /// `>` — move the tape pointer right, growing the tape by one cell at the end
    IncrementPointer,
    /// `<` — move the tape pointer left
    DecrementPointer,
    /// `+` — increment the current cell mod 256
    IncrementCell,
    /// `-` — decrement the current cell mod 256
    DecrementCell,
    /// `,` — read one character from the input provider into the current cell
    AcceptInput,
    /// `.` — append the current cell's character to the output
    AddOutput,
}

impl Command {
    /// Decode a source character, or `None` if it is a comment.
    pub fn from_char(c: char) -> Option<Command> {
        match c {
            '[' => Some(Command::OpenLoop),
            ']' => Some(Command::CloseLoop),
            '>' => Some(Command::IncrementPointer),
            '<' => Some(Command::DecrementPointer),
            '+' => Some(Command::IncrementCell),
            '-' => Some(Command::DecrementCell),
            ',' => Some(Command::AcceptInput),
            '.' => Some(Command::AddOutput),
            _ => None,
        }
    }

    /// The source character for this command.
    pub fn as_char(self) -> char {
        match self {
            Command::OpenLoop => '[',
            Command::CloseLoop => ']',
            Command::IncrementPointer => '>',
            Command::DecrementPointer => '<',
            Command::IncrementCell => '+',
            Command::DecrementCell => '-',
            Command::AcceptInput => ',',
            Command::AddOutput => '.',
        }
    }
}
