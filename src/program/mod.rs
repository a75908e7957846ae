//! Program representation and structural validation
//!
//! This module provides everything that is fixed before execution begins:
//! - [`commands`]: the closed eight-command instruction set
//! - [`validator`]: bracket matching, producing a [`validator::JumpTable`]
//!   or a positioned [`validator::SyntaxError`]
//!
//! # Validation Model
//!
//! Validation is purely structural: brackets must pair up. Non-bracket
//! characters are not checked against the instruction set here; unknown
//! characters are comments and are skipped at execution time.

pub mod commands;
pub mod validator;

pub use commands::{Command, COMMAND_CHARS};
pub use validator::{match_brackets, JumpTable, SyntaxError};
