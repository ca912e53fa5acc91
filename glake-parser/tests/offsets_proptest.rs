//! Property-based tests for byte offset <-> UTF-16 position translation

use glake_parser::position::{OffsetTranslator, Position, Range, RangeError};
use proptest::prelude::*;

const ALPHABET: &[char] = &['a', 'z', ' ', '\n', '\t', 'é', '€', '😀', '𝄞', '\r'];

fn buffer_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn offsets_round_trip_through_positions(src in buffer_strategy()) {
        let tr = OffsetTranslator::new(src.as_str());
        for offset in (0..=src.len()).filter(|&o| src.is_char_boundary(o)) {
            let pos = tr.byte_offset_to_position(offset).unwrap();
            prop_assert_eq!(tr.position_to_byte_offset(pos).unwrap(), offset);
        }
    }

    #[test]
    fn positions_match_utf16_encoding(src in buffer_strategy()) {
        let tr = OffsetTranslator::new(src.as_str());
        for (line, text) in src.split('\n').enumerate() {
            let end = Position::new(line, text.encode_utf16().count());
            let offset = tr.position_to_byte_offset(end).unwrap();
            prop_assert_eq!(tr.byte_offset_to_position(offset).unwrap(), end);
        }
    }

    #[test]
    fn columns_past_line_end_are_rejected(src in buffer_strategy()) {
        let tr = OffsetTranslator::new(src.as_str());
        for (line, text) in src.split('\n').enumerate() {
            let past = Position::new(line, text.encode_utf16().count() + 1);
            let range = Range::new(Position::new(line, 0), past);
            let is_column_error = matches!(
                tr.range_to_byte_offsets(range),
                Err(RangeError::Column { .. })
            );
            prop_assert!(is_column_error);
        }
    }

    #[test]
    fn byte_ranges_round_trip(
        src in buffer_strategy(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let boundaries: Vec<usize> = (0..=src.len()).filter(|&o| src.is_char_boundary(o)).collect();
        let (a, b) = (boundaries[a.index(boundaries.len())], boundaries[b.index(boundaries.len())]);
        let (start, end) = (a.min(b), a.max(b));
        let tr = OffsetTranslator::new(src.as_str());
        let range = tr.byte_offsets_to_range(start, end - start).unwrap();
        prop_assert_eq!(tr.range_to_byte_offsets(range).unwrap(), (start, end - start));
    }
}
