//! Input providers
//!
//! The engine reads `,` input through a synchronous, non-blocking poll:
//! the provider either returns the next character immediately or signals
//! that nothing is available. Waiting for a user belongs to the host,
//! which retries `step()` once input arrives.
//!
//! [`QueuedInput`] is the standard provider: a shared character queue
//! that decodes the escape syntax hosts accept in their input fields
//! (`\n`, `\r`, `\t`, `\\`, and decimal `\DDD`). Clones share the same
//! queue, so a host can keep one handle for feeding input while the
//! engine polls another.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A non-blocking source of single input characters.
///
/// Implementations must never block: return `None` when no input is
/// available right now.
pub trait InputSource {
    /// The next logical input character, or `None` if input is exhausted.
    fn next_char(&mut self) -> Option<char>;
}

/// Any `FnMut() -> Option<char>` closure is a provider.
impl<F: FnMut() -> Option<char>> InputSource for F {
    fn next_char(&mut self) -> Option<char> {
        self()
    }
}

/// A shared FIFO of decoded input characters.
///
/// Cloning is cheap and clones share the underlying queue; the engine
/// is single-threaded, so shared access needs no synchronization.
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    queue: Rc<RefCell<VecDeque<char>>>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one character as-is, no escape decoding.
    pub fn push_char(&self, c: char) {
        self.queue.borrow_mut().push_back(c);
    }

    /// Decode `raw` and enqueue the resulting logical characters.
    ///
    /// Multi-character escapes resolve to one logical character each:
    /// `\n`, `\r`, `\t`, `\\`, and `\DDD` with one to three decimal
    /// digits (a character code). A backslash followed by anything else
    /// is a literal backslash; the following character is taken as-is.
    pub fn push_raw(&self, raw: &str) {
        let mut queue = self.queue.borrow_mut();
        for c in decode_escapes(raw) {
            queue.push_back(c);
        }
    }

    /// Number of characters waiting to be read.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl InputSource for QueuedInput {
    fn next_char(&mut self) -> Option<char> {
        self.queue.borrow_mut().pop_front()
    }
}

/// Resolve the input escape syntax into logical characters.
pub fn decode_escapes(raw: &str) -> Vec<char> {
    let mut out = Vec::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some('r') => {
                chars.next();
                out.push('\r');
            }
            Some('t') => {
                chars.next();
                out.push('\t');
            }
            Some('\\') => {
                chars.next();
                out.push('\\');
            }
            Some(d) if d.is_ascii_digit() => {
                let mut code: u32 = 0;
                let mut digits = 0;
                while digits < 3 {
                    match chars.peek() {
                        Some(d) if d.is_ascii_digit() => {
                            code = code * 10 + d.to_digit(10).unwrap_or(0);
                            chars.next();
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                // At most three digits, so the code fits in a byte mod 256.
                out.push(char::from((code % 256) as u8));
            }
            // Trailing or unrecognized escape: the backslash is literal.
            _ => out.push('\\'),
        }
    }

    out
}
