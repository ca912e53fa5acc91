//! Rune decoding and classification
//!
//! Quote classification is an explicit table instead of a Unicode property lookup so that the
//! set of quote runes is fixed and identical on every platform.

/// Escape rune used by toolbar text on this platform.
#[cfg(windows)]
pub const DEFAULT_ESCAPE_RUNE: char = '^';
/// Escape rune used by toolbar text on this platform.
#[cfg(not(windows))]
pub const DEFAULT_ESCAPE_RUNE: char = '\\';

/// Unicode `Quotation_Mark` code points (besides the ASCII ones) as inclusive ranges.
const QUOTATION_MARKS: &[(char, char)] = &[
    ('\u{00AB}', '\u{00AB}'),
    ('\u{00BB}', '\u{00BB}'),
    ('\u{2018}', '\u{201F}'),
    ('\u{2039}', '\u{203A}'),
    ('\u{2E42}', '\u{2E42}'),
    ('\u{300C}', '\u{300F}'),
    ('\u{301D}', '\u{301F}'),
    ('\u{FE41}', '\u{FE44}'),
    ('\u{FF02}', '\u{FF02}'),
    ('\u{FF07}', '\u{FF07}'),
    ('\u{FF62}', '\u{FF63}'),
];

/// Whether `ru` opens (and closes) a quoted run: `'`, `"`, `` ` `` or a Unicode quotation mark.
pub fn is_quote(ru: char) -> bool {
    match ru {
        '\'' | '"' | '`' => true,
        c if c.is_ascii() => false,
        c => QUOTATION_MARKS
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&c)),
    }
}

/// Decode the first rune of `bytes`.
///
/// Returns `None` on empty input. Invalid or truncated sequences decode as
/// `U+FFFD` with a width of one byte, so a scan over arbitrary bytes always advances.
pub fn decode_rune(bytes: &[u8]) -> Option<(char, usize)> {
    let first = *bytes.first()?;
    let width = match first {
        0x00..=0x7F => return Some((first as char, 1)),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Some((char::REPLACEMENT_CHARACTER, 1)),
    };
    let decoded = bytes
        .get(..width)
        .and_then(|seq| std::str::from_utf8(seq).ok())
        .and_then(|s| s.chars().next());
    match decoded {
        Some(ru) => Some((ru, width)),
        None => Some((char::REPLACEMENT_CHARACTER, 1)),
    }
}
