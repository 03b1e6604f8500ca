//! Document coordinates.
//!
//! Lines and columns are zero-based. Columns count UTF-8 code units (bytes)
//! from the start of the line, so a column always indexes straight into the
//! line's `&str`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A location in a document, ordered by line then column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based byte offset within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position `width` bytes further along the same line.
    #[must_use]
    pub const fn shifted(self, width: usize) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add(width),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open span between two positions, `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Creates a range, swapping the endpoints if they arrive out of order.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns whether the range covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns whether `pos` lies within the range (end exclusive).
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
