//! glake positions <-> LSP positions
//!
//! [`Position`] and [`lsp_types::Position`] share their meaning (0-based line, UTF-16 column)
//! and differ only in integer width. LSP values are `u32`; larger values saturate.

use glake_parser::position::{ByteSource, OffsetTranslator, Position, Range};
use tracing::debug;

use crate::BridgeError;

pub fn to_lsp_position(pos: Position) -> lsp_types::Position {
    lsp_types::Position::new(saturate(pos.line), saturate(pos.character))
}

pub fn from_lsp_position(pos: lsp_types::Position) -> Position {
    Position::new(pos.line as usize, pos.character as usize)
}

pub fn to_lsp_range(range: Range) -> lsp_types::Range {
    lsp_types::Range::new(to_lsp_position(range.start), to_lsp_position(range.end))
}

/// Servers occasionally send inverted ranges; those are rejected rather than swapped.
pub fn from_lsp_range(range: lsp_types::Range) -> Result<Range, BridgeError> {
    if (range.end.line, range.end.character) < (range.start.line, range.start.character) {
        debug!(?range, "inverted lsp range");
        return Err(BridgeError::EndBeforeStart {
            start: range.start,
            end: range.end,
        });
    }
    Ok(Range::new(
        from_lsp_position(range.start),
        from_lsp_position(range.end),
    ))
}

pub fn offset_to_lsp_position<S: ByteSource + ?Sized>(
    src: &S,
    offset: usize,
) -> Result<lsp_types::Position, BridgeError> {
    let pos = OffsetTranslator::new(src).byte_offset_to_position(offset)?;
    Ok(to_lsp_position(pos))
}

/// Byte offset and length of `range` in `src`.
pub fn lsp_range_to_offsets<S: ByteSource + ?Sized>(
    src: &S,
    range: lsp_types::Range,
) -> Result<(usize, usize), BridgeError> {
    let range = from_lsp_range(range)?;
    Ok(OffsetTranslator::new(src).range_to_byte_offsets(range)?)
}

pub fn offsets_to_lsp_range<S: ByteSource + ?Sized>(
    src: &S,
    offset: usize,
    len: usize,
) -> Result<lsp_types::Range, BridgeError> {
    let range = OffsetTranslator::new(src).byte_offsets_to_range(offset, len)?;
    Ok(to_lsp_range(range))
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
