//! Loader for textual before/after transition fixtures.
//!
//! A fixture file holds `N` lines for the starting board, one blank line,
//! then `N` lines for the board expected after a single step:
//!
//! ```text
//! -----
//! -xxx-
//! -----
//!
//! --x--
//! --x--
//! --x--
//! ```
//!
//! The structure is validated before any cells are compared: the line count
//! must be odd, the middle line must be empty, and the two halves must parse
//! to boards of equal dimensions. The integration tests replay every file in
//! `test_boards/` through [`crate::stepper::step`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::board::Board;
use crate::error::FormatError;

/// Load one fixture file into its (before, after) board pair.
pub fn load_transition(path: &Path) -> Result<(Board, Board), FormatError> {
    let content = fs::read_to_string(path)?;
    parse_transition(&content)
}

/// Parse fixture text into its (before, after) board pair.
pub fn parse_transition(content: &str) -> Result<(Board, Board), FormatError> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() % 2 == 0 {
        return Err(FormatError::EvenLineCount(lines.len()));
    }
    let middle = lines.len() / 2;
    if !lines[middle].is_empty() {
        return Err(FormatError::MiddleLineNotEmpty {
            line: middle,
            len: lines[middle].len(),
        });
    }

    let before = Board::from_text(&lines[..middle])?;
    let after = Board::from_text(&lines[middle + 1..])?;

    if !before.dimensions_equal(&after) {
        let (before_height, before_width) = before.dimensions();
        let (after_height, after_width) = after.dimensions();
        return Err(FormatError::DimensionMismatch {
            before_height,
            before_width,
            after_height,
            after_width,
        });
    }

    Ok((before, after))
}

/// Load every fixture in a directory, sorted by file name so failures are
/// reported in a stable order. Returns each file's path with its board pair.
pub fn load_transition_dir(dir: &Path) -> Result<Vec<(PathBuf, (Board, Board))>, FormatError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut fixtures = Vec::with_capacity(paths.len());
    for path in paths {
        let boards = load_transition(&path)?;
        fixtures.push((path, boards));
    }
    Ok(fixtures)
}
