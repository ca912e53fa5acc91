//! Strip one layer of quoting from an arg
//!
//! Supported forms:
//!
//! - `"..."` and `'...'` with backslash escapes: `\a \b \f \n \r \t \v \\ \' \"`, `\xHH`,
//!   three digit octal `\NNN`, `\uHHHH` and `\UHHHHHHHH`
//! - `` `...` `` raw, no escapes
//!
//! Escapes may produce arbitrary bytes (`\xff`); the result must still be valid UTF-8.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnquoteError {
    #[error("not a quoted string")]
    NotQuoted,
    #[error("unescaped quote at byte {pos}")]
    UnexpectedQuote { pos: usize },
    #[error("newline inside quoted string at byte {pos}")]
    Newline { pos: usize },
    #[error("invalid escape at byte {pos}")]
    InvalidEscape { pos: usize },
    #[error("unquoted value is not valid utf-8")]
    InvalidUtf8,
}

pub fn unquote(text: &str) -> Result<String, UnquoteError> {
    let bytes = text.as_bytes();
    let quote = match bytes.first() {
        Some(&q @ (b'"' | b'\'' | b'`')) => q,
        _ => return Err(UnquoteError::NotQuoted),
    };
    if bytes.len() < 2 || bytes[bytes.len() - 1] != quote {
        return Err(UnquoteError::NotQuoted);
    }
    let inner = &text[1..text.len() - 1];

    if quote == b'`' {
        if let Some(i) = inner.find('`') {
            return Err(UnquoteError::UnexpectedQuote { pos: i + 1 });
        }
        return Ok(inner.to_string());
    }

    let inner = inner.as_bytes();
    let mut out = Vec::with_capacity(inner.len());
    let mut i = 0;
    while i < inner.len() {
        let pos = i + 1;
        match inner[i] {
            b'\\' => {
                i = unescape(inner, i + 1, &mut out).ok_or(UnquoteError::InvalidEscape { pos })?;
            }
            b'\n' => return Err(UnquoteError::Newline { pos }),
            b if b == quote => return Err(UnquoteError::UnexpectedQuote { pos }),
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

/// Decode the escape whose letter is at `s[i]`, returning the index after it.
fn unescape(s: &[u8], i: usize, out: &mut Vec<u8>) -> Option<usize> {
    let simple = match *s.get(i)? {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        c @ (b'\\' | b'\'' | b'"') => Some(c),
        _ => None,
    };
    if let Some(b) = simple {
        out.push(b);
        return Some(i + 1);
    }
    match s[i] {
        b'x' => {
            let v = parse_digits(s.get(i + 1..i + 3)?, 16)?;
            out.push(u8::try_from(v).ok()?);
            Some(i + 3)
        }
        b'0'..=b'7' => {
            let v = parse_digits(s.get(i..i + 3)?, 8)?;
            out.push(u8::try_from(v).ok()?);
            Some(i + 3)
        }
        b'u' | b'U' => {
            let n = if s[i] == b'u' { 4 } else { 8 };
            let v = parse_digits(s.get(i + 1..i + 1 + n)?, 16)?;
            let ch = char::from_u32(v)?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            Some(i + 1 + n)
        }
        _ => None,
    }
}

fn parse_digits(digits: &[u8], radix: u32) -> Option<u32> {
    let s = std::str::from_utf8(digits).ok()?;
    if !s.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(s, radix).ok()
}
