//! Applying LSP text edits to a buffer
//!
//! LSP requires all edits of one request to refer to the original document and to not overlap.
//! Each edit is therefore resolved to a byte span against the untouched buffer, the spans are
//! checked, and only then is anything applied, last span first, so earlier offsets stay valid.

use glake_parser::position::OffsetTranslator;
use tracing::trace;

use crate::convert::from_lsp_range;
use crate::BridgeError;

/// Text edit expressed as byte offsets over the original buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditSpan {
    pub start: usize,
    pub end: usize,
    pub new_text: String,
}

/// Resolve `edits` to byte spans over `buffer`, ordered by start.
///
/// Inserts at the same offset keep their request order.
pub fn resolve_text_edits(
    buffer: &str,
    edits: &[lsp_types::TextEdit],
) -> Result<Vec<TextEditSpan>, BridgeError> {
    let tr = OffsetTranslator::new(buffer);
    let mut spans = edits
        .iter()
        .map(|edit| {
            let range = from_lsp_range(edit.range)?;
            let (start, len) = tr.range_to_byte_offsets(range)?;
            Ok(TextEditSpan {
                start,
                end: start + len,
                new_text: edit.new_text.clone(),
            })
        })
        .collect::<Result<Vec<_>, BridgeError>>()?;
    spans.sort_by_key(|span| span.start);

    for pair in spans.windows(2) {
        if pair[0].end > pair[1].start {
            return Err(BridgeError::OverlappingEdits {
                first_end: pair[0].end,
                second_start: pair[1].start,
                second_end: pair[1].end,
            });
        }
    }
    Ok(spans)
}

/// Apply `edits` to `buffer`, returning the new text. Nothing is applied if any edit fails.
pub fn apply_text_edits(buffer: &str, edits: &[lsp_types::TextEdit]) -> Result<String, BridgeError> {
    let spans = resolve_text_edits(buffer, edits)?;
    let mut out = buffer.to_string();
    for span in spans.iter().rev() {
        trace!(start = span.start, end = span.end, "apply edit");
        out.replace_range(span.start..span.end, &span.new_text);
    }
    Ok(out)
}
