//! Line starts and 1-based line/column lookups

use super::{ByteSource, RangeError};

/// Byte offsets at which each line starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(bytes: &[u8]) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            bytes
                .iter()
                .enumerate()
                .filter(|(_, b)| **b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            line_starts,
            len: bytes.len(),
        }
    }

    /// Index the whole of `src`.
    pub fn from_source<S: ByteSource + ?Sized>(src: &S) -> Result<Self, RangeError> {
        Ok(Self::new(&src.read_at(0, src.max())?))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Start of the 0-based `line`.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Offset of the newline ending the 0-based `line`, or the end of input on the last line.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        if line >= self.line_starts.len() {
            return None;
        }
        Some(
            self.line_starts
                .get(line + 1)
                .map_or(self.len, |next| next - 1),
        )
    }

    /// 0-based line and byte column of `offset`, which must be at most the indexed length.
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);
        (line, offset - self.line_starts[line])
    }
}

/// 1-based line and byte column of `offset`. `offset` may equal `src.max()`.
pub fn index_line_column<S: ByteSource + ?Sized>(
    src: &S,
    offset: usize,
) -> Result<(usize, usize), RangeError> {
    let max = src.max();
    if offset > max {
        return Err(RangeError::Offset { offset, max });
    }
    let index = LineIndex::new(&src.read_at(0, offset)?);
    let (line, column) = index.locate(offset);
    Ok((line + 1, column + 1))
}

/// Offset of the 1-based `line` and byte `column`.
///
/// The column may point at the newline ending the line (or the end of input), not past it.
pub fn line_column_index<S: ByteSource + ?Sized>(
    src: &S,
    line: usize,
    column: usize,
) -> Result<usize, RangeError> {
    let index = LineIndex::from_source(src)?;
    let line0 = line.checked_sub(1).ok_or(RangeError::Line {
        line,
        lines: index.line_count(),
    })?;
    let (start, end) = index
        .line_start(line0)
        .zip(index.line_end(line0))
        .ok_or(RangeError::Line {
            line,
            lines: index.line_count(),
        })?;
    match column.checked_sub(1) {
        Some(col0) if start + col0 <= end => Ok(start + col0),
        _ => Err(RangeError::Column {
            line_start: start,
            column,
            line_len: end - start,
        }),
    }
}
