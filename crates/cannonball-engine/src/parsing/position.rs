use std::fmt;

use serde::{Deserialize, Serialize};

/// A 1-based `line:column` location in the source text.
///
/// Columns count `char`s, so a tab or a multi-byte character is one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

impl Point {
    pub const START: Point = Point { line: 1, column: 1 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The span of a node: `start` is the first character, `end` is the column
/// just past the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        debug_assert!(start <= end, "position start {start} after end {end}");
        Self { start, end }
    }

    /// Whether `p` lies inside this span. Both ends are inclusive, so a cursor
    /// sitting just past the last character still counts as inside.
    pub fn contains(&self, p: Point) -> bool {
        if p.line < self.start.line || p.line > self.end.line {
            return false;
        }
        if p.line == self.start.line && p.column < self.start.column {
            return false;
        }
        if p.line == self.end.line && p.column > self.end.column {
            return false;
        }
        true
    }

    /// Specificity metric used by the locator; smaller is more specific.
    ///
    /// Every extra line costs 1000 columns, so any single-line span narrower
    /// than 1000 columns beats any multi-line span.
    pub fn area(&self) -> usize {
        if self.end.line > self.start.line {
            (1000 * (self.end.line - self.start.line) + self.end.column)
                .saturating_sub(self.start.column)
        } else {
            self.end.column.saturating_sub(self.start.column)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A host cursor: zero-based line and zero-based character offset in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPos {
    pub line: usize,
    pub ch: usize,
}

impl CursorPos {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl From<CursorPos> for Point {
    fn from(c: CursorPos) -> Self {
        Point {
            line: c.line + 1,
            column: c.ch + 1,
        }
    }
}
