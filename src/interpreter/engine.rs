// Execution engine for the Brainfuck interpreter

use crate::history::{History, HistoryEntry};
use crate::input::InputSource;
use crate::interpreter::errors::RuntimeError;
use crate::program::{match_brackets, Command, JumpTable, SyntaxError};

/// The stepping interpreter: one recognized instruction per `step()`,
/// reversible through a bounded history via `back()`.
///
/// The engine is passive and synchronous. It never loops on its own and
/// never blocks; bulk execution is the caller repeating `step()` at
/// whatever pace it likes, and cancellation is simply not calling again.
/// Breakpoints live entirely in the caller: compare the position returned
/// by `step()`/`back()` against your own set.
pub struct Interpreter {
    /// Source characters, commands and comments alike. Immutable.
    program: Vec<char>,

    /// Bracket partner positions, both directions. Built once by the
    /// validator at construction.
    jump_table: JumpTable,

    /// The byte cells. Starts as a single zero cell and grows one cell
    /// at a time as `>` walks off the right end. Never shrinks.
    tape: Vec<u8>,

    /// Index of the currently addressed cell.
    tape_pointer: usize,

    /// Position of the instruction just executed; `None` before the
    /// first step.
    instruction_pointer: Option<usize>,

    /// Everything `.` has produced, in execution order.
    output: String,

    /// Net instructions executed: +1 per step, -1 per back.
    instruction_count: usize,

    /// Undo ring; oldest entries are evicted silently when full.
    history: History,

    /// Non-blocking provider polled by `,`.
    input: Box<dyn InputSource>,

    /// Optional incremental sink invoked as `.` produces characters.
    output_fn: Option<Box<dyn FnMut(char)>>,
}

impl Interpreter {
    /// Validate `source` and build a fresh engine.
    ///
    /// `max_history` bounds the undo ring (`None` = unbounded); once more
    /// steps than the bound have executed, the oldest become
    /// unrecoverable.
    pub fn new(
        source: &str,
        input: Box<dyn InputSource>,
        max_history: Option<usize>,
    ) -> Result<Self, SyntaxError> {
        let program: Vec<char> = source.chars().collect();
        let jump_table = match_brackets(&program)?;

        Ok(Interpreter {
            program,
            jump_table,
            tape: vec![0],
            tape_pointer: 0,
            instruction_pointer: None,
            output: String::new(),
            instruction_count: 0,
            history: History::new(max_history),
            input,
            output_fn: None,
        })
    }

    /// Register an incremental output sink, invoked once per character
    /// produced by `.` (in addition to the [`output`](Self::output)
    /// buffer). Rolling back truncates the buffer only; the sink is
    /// notification for a host display, not part of engine state.
    pub fn set_output_fn(&mut self, f: impl FnMut(char) + 'static) {
        self.output_fn = Some(Box::new(f));
    }

    /// Execute exactly one recognized instruction, skipping comments.
    ///
    /// Returns the position of the instruction executed. On failure the
    /// engine state is untouched, with one documented exception: when the
    /// comment scan runs off the end of the program, the snapshot pushed
    /// for this step stays in the history as evictable dead weight.
    pub fn step(&mut self) -> Result<usize, RuntimeError> {
        let mut next = match self.instruction_pointer {
            None => 0,
            Some(i) => i + 1,
        };
        if next >= self.program.len() {
            return Err(RuntimeError::ExecutionEnded);
        }

        let entry = HistoryEntry {
            instruction_pointer: self.instruction_pointer,
            tape_pointer: self.tape_pointer,
            cell: self.tape[self.tape_pointer],
            output_len: self.output.len(),
        };
        self.history.push(entry);

        // Scan past comment characters to the next command.
        let command = loop {
            match self.program.get(next) {
                Some(&c) => match Command::from_char(c) {
                    Some(command) => break command,
                    None => next += 1,
                },
                None => {
                    // Ran off the end without finding a command. Leave the
                    // pointer on the last index so the next step() reports
                    // ExecutionEnded immediately.
                    self.instruction_pointer = Some(self.program.len() - 1);
                    return Err(RuntimeError::ExecutionEnded);
                }
            }
        };
        self.instruction_pointer = Some(next);

        match command {
            Command::IncrementPointer => {
                self.tape_pointer += 1;
                if self.tape_pointer == self.tape.len() {
                    self.tape.push(0);
                }
            }
            Command::DecrementPointer => {
                if self.tape_pointer == 0 {
                    self.revert_failed_step(entry);
                    return Err(RuntimeError::InvalidTapeCell { position: next });
                }
                self.tape_pointer -= 1;
            }
            Command::IncrementCell => {
                self.tape[self.tape_pointer] = self.tape[self.tape_pointer].wrapping_add(1);
            }
            Command::DecrementCell => {
                self.tape[self.tape_pointer] = self.tape[self.tape_pointer].wrapping_sub(1);
            }
            Command::OpenLoop => {
                if self.tape[self.tape_pointer] == 0 {
                    // Every bracket has a partner: match_brackets succeeded.
                    self.instruction_pointer = Some(self.jump_table[&next]);
                }
            }
            Command::CloseLoop => {
                if self.tape[self.tape_pointer] != 0 {
                    self.instruction_pointer = Some(self.jump_table[&next]);
                }
            }
            Command::AcceptInput => match self.input.next_char() {
                Some(c) => {
                    self.tape[self.tape_pointer] = (c as u32 % 256) as u8;
                }
                None => {
                    self.revert_failed_step(entry);
                    return Err(RuntimeError::NoInput);
                }
            },
            Command::AddOutput => {
                let c = char::from(self.tape[self.tape_pointer]);
                self.output.push(c);
                if let Some(f) = self.output_fn.as_mut() {
                    f(c);
                }
            }
        }

        self.instruction_count += 1;
        Ok(next)
    }

    /// Reverse exactly one prior step.
    ///
    /// Restores the instruction pointer, tape pointer, the single cell
    /// the step could have changed, and truncates the output. Returns
    /// the restored instruction pointer (`None` when rewound to the
    /// not-started state).
    pub fn back(&mut self) -> Result<Option<usize>, RuntimeError> {
        let entry = self
            .history
            .pop()
            .ok_or(RuntimeError::NoPreviousExecution)?;
        self.restore(entry);
        // Saturating: a dead-weight entry from an off-end comment scan
        // does not correspond to an executed instruction.
        self.instruction_count = self.instruction_count.saturating_sub(1);
        Ok(self.instruction_pointer)
    }

    /// Step forwards (`steps > 0`) or backwards (`steps < 0`) up to
    /// `|steps|` times, stopping early without error on the first
    /// failure. Returns the number of steps actually performed.
    pub fn jump(&mut self, steps: i64) -> usize {
        let mut performed = 0;
        for _ in 0..steps.unsigned_abs() {
            let ok = if steps > 0 {
                self.step().is_ok()
            } else {
                self.back().is_ok()
            };
            if !ok {
                break;
            }
            performed += 1;
        }
        performed
    }

    /// Step until the program ends, then return the accumulated output.
    ///
    /// `ExecutionEnded` is normal completion; `NoInput` and
    /// `InvalidTapeCell` propagate so the caller can supply input or
    /// inspect the failure.
    pub fn run(&mut self) -> Result<&str, RuntimeError> {
        loop {
            match self.step() {
                Ok(_) => {}
                Err(RuntimeError::ExecutionEnded) => return Ok(&self.output),
                Err(e) => return Err(e),
            }
        }
    }

    /// Discard all execution state, keeping the program and jump table.
    ///
    /// The source has not changed, so revalidation is unnecessary; this
    /// is equivalent to constructing a fresh engine over the same text.
    pub fn reset(&mut self) {
        self.tape = vec![0];
        self.tape_pointer = 0;
        self.instruction_pointer = None;
        self.output.clear();
        self.instruction_count = 0;
        self.history.clear();
    }

    /// Undo the partial effects of a step that failed transactionally.
    ///
    /// Discards the snapshot pushed at the top of this step and restores
    /// from the local copy, so the rollback works even when the history
    /// ring is too small to have kept it.
    fn revert_failed_step(&mut self, entry: HistoryEntry) {
        self.history.pop();
        self.restore(entry);
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.instruction_pointer = entry.instruction_pointer;
        self.tape_pointer = entry.tape_pointer;
        self.tape[entry.tape_pointer] = entry.cell;
        self.output.truncate(entry.output_len);
    }

    // ========== Read surface for hosts / UI ==========

    /// The full tape contents.
    pub fn tape(&self) -> &[u8] {
        &self.tape
    }

    /// A single cell, or `None` past the tape's current extent.
    pub fn cell(&self, index: usize) -> Option<u8> {
        self.tape.get(index).copied()
    }

    /// Value of the currently addressed cell.
    pub fn current_cell(&self) -> u8 {
        self.tape[self.tape_pointer]
    }

    /// Index of the currently addressed cell.
    pub fn tape_pointer(&self) -> usize {
        self.tape_pointer
    }

    /// Position of the instruction just executed; `None` before the
    /// first step.
    pub fn instruction_pointer(&self) -> Option<usize> {
        self.instruction_pointer
    }

    /// The source character at the instruction pointer, if any. Hosts
    /// use this to special-case `,` when displaying a rollback.
    pub fn current_instruction(&self) -> Option<char> {
        self.instruction_pointer
            .and_then(|i| self.program.get(i))
            .copied()
    }

    /// Net instructions executed so far. Zero means nothing has run yet
    /// (or everything has been rolled back).
    pub fn instruction_count(&self) -> usize {
        self.instruction_count
    }

    /// Everything `.` has produced.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of steps currently recoverable by `back()`.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The configured history bound, `None` if unbounded.
    pub fn max_history(&self) -> Option<usize> {
        self.history.capacity()
    }

    /// Number of characters in the program source (commands and
    /// comments alike).
    pub fn program_len(&self) -> usize {
        self.program.len()
    }
}
