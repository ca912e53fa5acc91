//! Conversion between byte offsets and UTF-16 positions

use tracing::debug;

use super::{index_line_column, line_column_index, ByteSource, Position, Range, RangeError};
use crate::scan::decode_rune;

/// UTF-16 length of the `utf8_col` bytes following `line_start`.
pub fn utf16_column<S: ByteSource + ?Sized>(
    src: &S,
    line_start: usize,
    utf8_col: usize,
) -> Result<usize, RangeError> {
    let bytes = src.read_at(line_start, utf8_col)?;
    let mut rest: &[u8] = &bytes;
    let mut units = 0;
    while let Some((ru, width)) = decode_rune(rest) {
        units += ru.len_utf16();
        rest = &rest[width..];
    }
    Ok(units)
}

/// Byte length of the first `utf16_col` UTF-16 units following `line_start`.
///
/// Fails if the line ends, or the buffer does, before that many units, or if the column falls
/// between the two halves of a surrogate pair.
pub fn utf8_column<S: ByteSource + ?Sized>(
    src: &S,
    line_start: usize,
    utf16_col: usize,
) -> Result<usize, RangeError> {
    let max = src.max();
    if line_start > max {
        return Err(RangeError::Offset {
            offset: line_start,
            max,
        });
    }
    // a unit never takes more than 4 bytes
    let n = utf16_col.saturating_mul(4).min(max - line_start);
    let bytes = src.read_at(line_start, n)?;

    let mut units = 0;
    let mut len = 0;
    while units < utf16_col {
        let (ru, width) = match decode_rune(&bytes[len..]) {
            Some((ru, width)) if ru != '\n' => (ru, width),
            _ => {
                return Err(RangeError::Column {
                    line_start,
                    column: utf16_col,
                    line_len: units,
                })
            }
        };
        units += ru.len_utf16();
        len += width;
    }
    if units > utf16_col {
        return Err(RangeError::SplitCharacter {
            line_start,
            column: utf16_col,
        });
    }
    Ok(len)
}

/// Translates positions for one buffer. Holds only a reference; every call re-reads what it
/// needs.
#[derive(Debug)]
pub struct OffsetTranslator<'s, S: ?Sized> {
    src: &'s S,
}

impl<'s, S: ?Sized> Clone for OffsetTranslator<'s, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, S: ?Sized> Copy for OffsetTranslator<'s, S> {}

impl<'s, S: ByteSource + ?Sized> OffsetTranslator<'s, S> {
    pub fn new(src: &'s S) -> Self {
        Self { src }
    }

    pub fn source(&self) -> &'s S {
        self.src
    }

    pub fn byte_offset_to_position(&self, offset: usize) -> Result<Position, RangeError> {
        self.offset_position(offset).map_err(|err| {
            debug!(%err, offset, "byte offset has no position");
            err
        })
    }

    pub fn position_to_byte_offset(&self, pos: Position) -> Result<usize, RangeError> {
        self.position_offset(pos).map_err(|err| {
            debug!(%err, %pos, "position has no byte offset");
            err
        })
    }

    /// Start offset and byte length of `range`.
    pub fn range_to_byte_offsets(&self, range: Range) -> Result<(usize, usize), RangeError> {
        let start = self.position_to_byte_offset(range.start)?;
        let end = self.position_to_byte_offset(range.end)?;
        if end < start {
            debug!(%range, "inverted range");
            return Err(RangeError::Inverted { start, end });
        }
        Ok((start, end - start))
    }

    /// Range covering `len` bytes from `offset`.
    pub fn byte_offsets_to_range(&self, offset: usize, len: usize) -> Result<Range, RangeError> {
        let end = offset.checked_add(len).ok_or(RangeError::Offset {
            offset,
            max: self.src.max(),
        })?;
        Ok(Range::new(
            self.byte_offset_to_position(offset)?,
            self.byte_offset_to_position(end)?,
        ))
    }

    fn offset_position(&self, offset: usize) -> Result<Position, RangeError> {
        let (line, column) = index_line_column(self.src, offset)?;
        let line_start = offset - (column - 1);
        let character = utf16_column(self.src, line_start, column - 1)?;
        Ok(Position::new(line - 1, character))
    }

    fn position_offset(&self, pos: Position) -> Result<usize, RangeError> {
        let line_start = line_column_index(self.src, pos.line + 1, 1)?;
        Ok(line_start + utf8_column(self.src, line_start, pos.character)?)
    }
}
