// File: ./src/error.rs
//! Error types for the task manager.
//!
//! `BotError` is what a user sees: every variant renders as a single line and
//! is recovered by the interpreter. `RecordError` describes a save-file line
//! that could not be loaded; it is logged and the line is skipped.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// Missing or empty argument, or a malformed `/by`, `/from`, `/to` clause.
    #[error("{0}")]
    CommandSyntax(String),

    /// Index outside `[1, count]`, or not a number at all.
    #[error("That task does not exist!")]
    IndexOutOfRange(String),

    #[error(
        "I'm sorry, I had some trouble understanding the time \"{input}\". Please ensure you have formatted it correctly. [{pattern}]"
    )]
    TimeFormat {
        input: String,
        pattern: &'static str,
    },

    #[error("I'm sorry, I don't recognize that command.")]
    UnrecognizedCommand(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected {expected} fields for kind '{kind}', found {found}")]
    FieldCount {
        kind: String,
        expected: usize,
        found: usize,
    },

    #[error("line is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("unknown task kind '{0}'")]
    UnknownKind(String),

    #[error("invalid task: {0}")]
    Task(#[from] BotError),
}
