//! Errors for board parsing and fixture loading.
//!
//! Everything here is recoverable: parsers return `Err` and never hand back a
//! partial board. HTTP-level input problems (bad JSON, oversized requests)
//! are mapped to status codes in [`crate::server`] and never reach this type.

use std::io;

use thiserror::Error;

/// Malformed textual input: an unrecognized board character, or a transition
/// fixture that violates the before/blank/after file structure.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A character outside the `{'x', '-'}` alphabet. Positions are 0-based.
    #[error("invalid character {ch:?} at line {line}, column {col}")]
    BadCharacter { ch: char, line: usize, col: usize },

    /// A transition fixture needs N board lines, one blank line, N more board
    /// lines, so the total must be odd.
    #[error("fixture has {0} lines; expected an odd count (before, blank, after)")]
    EvenLineCount(usize),

    #[error("fixture middle line {line} is {len} characters long; expected it empty")]
    MiddleLineNotEmpty { line: usize, len: usize },

    /// The before and after halves of a fixture describe differently sized boards.
    #[error("fixture boards differ in size: before is {before_height}x{before_width}, after is {after_height}x{after_width}")]
    DimensionMismatch {
        before_height: usize,
        before_width: usize,
        after_height: usize,
        after_width: usize,
    },

    #[error("failed to read fixture: {0}")]
    Io(#[from] io::Error),
}
