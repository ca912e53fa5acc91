//! UTF-8 byte offsets <-> line/character positions
//!
//!     The editor buffer is addressed in UTF-8 bytes; language servers address text as 0-based
//!     lines and UTF-16 code unit columns. Every position that crosses that boundary goes through
//!     an [`OffsetTranslator`], once per direction. Nothing is cached: each request re-derives
//!     the line start and re-encodes the bytes between it and the requested column.
//!
//! Types
//!
//!     - [`Position`]: 0-based line plus UTF-16 column
//!     - [`Range`]: start and end positions
//!     - [`ByteSource`]: random access reads over a buffer (slices, strings, editor buffers)
//!     - [`LineIndex`]: line starts of a byte run, binary searched
//!     - [`RangeError`]: every way a request can point outside the buffer
//!
//! Columns
//!
//!     Two column conventions meet here. The line helpers [`index_line_column`] and
//!     [`line_column_index`] are 1-based with byte columns. [`utf16_column`] and
//!     [`utf8_column`] are 0-based and convert a column relative to a line start between bytes
//!     and UTF-16 units. Invalid UTF-8 counts as one `U+FFFD` per byte, the same as the
//!     scanner decodes it.

mod error;
mod lines;
mod source;
mod translator;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::RangeError;
pub use lines::{index_line_column, line_column_index, LineIndex};
pub use source::ByteSource;
pub use translator::{utf16_column, utf8_column, OffsetTranslator};

/// Line and UTF-16 column, both 0-based.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `pos` lies within the range, both ends included.
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
