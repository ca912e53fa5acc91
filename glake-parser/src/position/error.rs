use thiserror::Error;

/// A position or offset that does not exist in the buffer.
///
/// Callers must drop the request that produced it; there is no clamped fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("offset {offset} is out of bounds (max {max})")]
    Offset { offset: usize, max: usize },
    #[error("line {line} does not exist ({lines} lines)")]
    Line { line: usize, lines: usize },
    #[error("column {column} is past the end of the line at byte {line_start} (length {line_len})")]
    Column {
        line_start: usize,
        column: usize,
        line_len: usize,
    },
    #[error("column {column} splits a surrogate pair on the line at byte {line_start}")]
    SplitCharacter { line_start: usize, column: usize },
    #[error("read of {len} bytes at {offset} is out of bounds (max {max})")]
    Read { offset: usize, len: usize, max: usize },
    #[error("range end {end} is before its start {start}")]
    Inverted { start: usize, end: usize },
}
