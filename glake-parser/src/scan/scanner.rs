//! Position-tracked cursor with backtracking combinators.

use regex::bytes::Regex;
use tracing::trace;

use super::error::{ScanError, ScanResult};
use super::runes::{decode_rune, is_quote};

/// Saved cursor position. Restoring it undoes everything consumed since [`Scanner::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn pos(self) -> usize {
        self.0
    }
}

/// A single combinator step, borrowed for the duration of an [`Scanner::and`] or
/// [`Scanner::or`] call.
pub type Step<'s, 'a, T> = &'s mut dyn FnMut(&mut Scanner<'a>) -> ScanResult<T>;

/// Cursor over a byte slice.
///
/// The cursor always sits on a rune boundary as produced by [`decode_rune`]; invalid bytes are
/// stepped over one at a time.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    pub fn for_str(src: &'a str) -> Self {
        Self::new(src.as_bytes())
    }

    pub fn src(&self) -> &'a [u8] {
        self.src
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor directly.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pos` is past the end of the source.
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.src.len(),
            "scanner position {} out of bounds (len {})",
            pos,
            self.src.len()
        );
        self.pos = pos;
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a [u8] {
        &self.src[self.pos..]
    }

    pub fn mark(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.set_pos(checkpoint.0);
    }

    /// Bytes consumed since `checkpoint`.
    pub fn bytes_since(&self, checkpoint: Checkpoint) -> &'a [u8] {
        &self.src[checkpoint.0..self.pos]
    }

    fn no_match(&self) -> ScanError {
        ScanError::NoMatch { pos: self.pos }
    }

    pub fn peek_rune(&self) -> Option<char> {
        decode_rune(self.rest()).map(|(ru, _)| ru)
    }

    pub fn read_rune(&mut self) -> ScanResult<char> {
        match decode_rune(self.rest()) {
            Some((ru, width)) => {
                self.pos += width;
                Ok(ru)
            }
            None => Err(ScanError::Eof { pos: self.pos }),
        }
    }

    pub fn match_eof(&self) -> ScanResult<()> {
        if self.is_eof() {
            Ok(())
        } else {
            Err(self.no_match())
        }
    }

    /// Consume `ru` if it is the current rune.
    pub fn match_rune(&mut self, ru: char) -> ScanResult<()> {
        match decode_rune(self.rest()) {
            Some((got, width)) if got == ru => {
                self.pos += width;
                Ok(())
            }
            Some(_) => Err(self.no_match()),
            None => Err(ScanError::Eof { pos: self.pos }),
        }
    }

    /// Consume the current rune if it is any of `set`, returning its bytes.
    pub fn match_rune_one_of(&mut self, set: &[char]) -> ScanResult<&'a [u8]> {
        let start = self.mark();
        match decode_rune(self.rest()) {
            Some((got, width)) if set.contains(&got) => {
                self.pos += width;
                Ok(self.bytes_since(start))
            }
            Some(_) => Err(self.no_match()),
            None => Err(ScanError::Eof { pos: self.pos }),
        }
    }

    /// Match `regex` starting exactly at the cursor.
    ///
    /// Only the next `max_len` bytes are offered to the regex, which bounds the cost on
    /// pathological input. A match that does not start at the cursor is a failure.
    pub fn match_regex_from_start(&mut self, regex: &Regex, max_len: usize) -> ScanResult<&'a [u8]> {
        let end = self.pos.saturating_add(max_len).min(self.src.len());
        let window = &self.src[self.pos..end];
        match regex.find(window) {
            Some(m) if m.start() == 0 && m.end() > 0 => {
                let start = self.mark();
                self.pos += m.end();
                Ok(self.bytes_since(start))
            }
            _ => Err(self.no_match()),
        }
    }

    /// Consume the escape rune together with the rune that follows it.
    pub fn match_escape_any(&mut self, escape: char) -> ScanResult<&'a [u8]> {
        self.attempt(|sc| {
            let start = sc.mark();
            sc.match_rune(escape)?;
            sc.read_rune()?;
            Ok(sc.bytes_since(start))
        })
    }

    /// Consume a quoted run, quotes included.
    ///
    /// The run must start on a quote rune (see [`is_quote`]) and ends on the same rune.
    /// `escape` makes the following rune literal. Unterminated runs and runs longer than
    /// `max_len` bytes do not match.
    pub fn match_quoted_string(&mut self, escape: char, max_len: usize) -> ScanResult<&'a [u8]> {
        let start = self.mark();
        let result = self.attempt(|sc| {
            let quote = sc.read_rune()?;
            if !is_quote(quote) {
                return Err(ScanError::NoMatch { pos: start.pos() });
            }
            loop {
                if sc.pos - start.pos() > max_len {
                    return Err(ScanError::NoMatch { pos: start.pos() });
                }
                let ru = sc.read_rune()?;
                if ru == escape {
                    sc.read_rune()?;
                } else if ru == quote {
                    return Ok(sc.bytes_since(start));
                }
            }
        });
        result.map_err(|_| ScanError::NoMatch { pos: start.pos() })
    }

    /// Run `f`, restoring the cursor if it fails.
    pub fn attempt<T, F>(&mut self, f: F) -> ScanResult<T>
    where
        F: FnOnce(&mut Self) -> ScanResult<T>,
    {
        let checkpoint = self.mark();
        let result = f(self);
        if result.is_err() {
            self.restore(checkpoint);
        }
        result
    }

    /// All steps must match in sequence; otherwise the whole group is undone.
    pub fn and(&mut self, steps: &mut [Step<'_, 'a, ()>]) -> ScanResult<()> {
        self.attempt(|sc| {
            for step in steps.iter_mut() {
                step(sc)?;
            }
            Ok(())
        })
    }

    /// Try alternatives left to right; the first match wins.
    ///
    /// Each failed alternative is undone before the next one runs. If none matches, the error
    /// of the last alternative is returned.
    pub fn or<T>(&mut self, alts: &mut [Step<'_, 'a, T>]) -> ScanResult<T> {
        let mut last = self.no_match();
        for alt in alts.iter_mut() {
            match self.attempt(|sc| alt(sc)) {
                Ok(v) => return Ok(v),
                Err(err) => last = err,
            }
        }
        Err(last)
    }

    /// Repeat `step` until it fails or the input ends. Succeeds when it matched at least
    /// `min` times, returning the count.
    pub fn repeat<F>(&mut self, min: usize, mut step: F) -> ScanResult<usize>
    where
        F: FnMut(&mut Self) -> ScanResult<()>,
    {
        let start = self.mark();
        let mut count = 0;
        while !self.is_eof() {
            let before = self.pos;
            if self.attempt(&mut step).is_err() {
                break;
            }
            count += 1;
            if self.pos == before {
                // matched nothing; repeating would never end
                break;
            }
        }
        if count < min {
            trace!(count, min, pos = start.pos(), "repeat below minimum");
            self.restore(start);
            return Err(ScanError::NoMatch { pos: start.pos() });
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> Regex {
        Regex::new("[0-9]+").unwrap()
    }

    #[test]
    fn mark_and_restore() {
        let mut sc = Scanner::for_str("abc");
        let cp = sc.mark();
        sc.read_rune().unwrap();
        sc.read_rune().unwrap();
        assert_eq!(sc.pos(), 2);
        sc.restore(cp);
        assert_eq!(sc.pos(), 0);
    }

    #[test]
    fn match_rune_advances_only_on_match() {
        let mut sc = Scanner::for_str("ab");
        assert_eq!(sc.match_rune('b'), Err(ScanError::NoMatch { pos: 0 }));
        assert_eq!(sc.match_rune('a'), Ok(()));
        assert_eq!(sc.pos(), 1);
    }

    #[test]
    fn match_rune_at_eof() {
        let mut sc = Scanner::for_str("");
        assert!(sc.match_rune('a').unwrap_err().is_eof());
        assert!(sc.match_eof().is_ok());
    }

    #[test]
    fn match_rune_one_of_multibyte() {
        let mut sc = Scanner::for_str("~x");
        assert_eq!(sc.match_rune_one_of(&['$', '~']).unwrap(), b"~");
        assert!(sc.match_rune_one_of(&['$', '~']).is_err());
        assert_eq!(sc.pos(), 1);

        let mut sc = Scanner::for_str("€1");
        assert_eq!(sc.match_rune_one_of(&['€']).unwrap(), "€".as_bytes());
        assert_eq!(sc.pos(), 3);
    }

    #[test]
    fn regex_is_anchored_at_cursor() {
        let re = digits();
        let mut sc = Scanner::for_str("a123");
        assert!(sc.match_regex_from_start(&re, 10).is_err());
        assert_eq!(sc.pos(), 0);
        sc.read_rune().unwrap();
        assert_eq!(sc.match_regex_from_start(&re, 10).unwrap(), b"123");
        assert!(sc.is_eof());
    }

    #[test]
    fn regex_window_is_bounded() {
        let re = digits();
        let mut sc = Scanner::for_str("123456");
        assert_eq!(sc.match_regex_from_start(&re, 4).unwrap(), b"1234");
        assert_eq!(sc.pos(), 4);
    }

    #[test]
    fn escape_consumes_two_runes() {
        let mut sc = Scanner::for_str(r"\|x");
        assert_eq!(sc.match_escape_any('\\').unwrap(), br"\|");
        assert_eq!(sc.pos(), 2);
    }

    #[test]
    fn escape_at_eof_restores() {
        let mut sc = Scanner::for_str("\\");
        assert!(sc.match_escape_any('\\').is_err());
        assert_eq!(sc.pos(), 0);
    }

    #[test]
    fn quoted_string_with_escaped_quote() {
        let src = r#""a\"b" rest"#;
        let mut sc = Scanner::for_str(src);
        assert_eq!(sc.match_quoted_string('\\', 100).unwrap(), br#""a\"b""#);
        assert_eq!(sc.rest(), b" rest");
    }

    #[test]
    fn quoted_string_closes_on_same_rune() {
        let mut sc = Scanner::for_str("'a\"b' c");
        assert_eq!(sc.match_quoted_string('\\', 100).unwrap(), b"'a\"b'");

        let mut sc = Scanner::for_str("“hi“");
        assert_eq!(sc.match_quoted_string('\\', 100).unwrap(), "“hi“".as_bytes());
    }

    #[test]
    fn quoted_string_failures_restore() {
        for src in ["\"unterminated", "plain", "\"too long\""] {
            let mut sc = Scanner::for_str(src);
            assert_eq!(
                sc.match_quoted_string('\\', 4),
                Err(ScanError::NoMatch { pos: 0 }),
                "{src}"
            );
            assert_eq!(sc.pos(), 0);
        }
    }

    #[test]
    fn and_restores_whole_group() {
        let mut sc = Scanner::for_str("abd");
        let result = sc.and(&mut [
            &mut |sc: &mut Scanner<'_>| sc.match_rune('a'),
            &mut |sc: &mut Scanner<'_>| sc.match_rune('b'),
            &mut |sc: &mut Scanner<'_>| sc.match_rune('c'),
        ]);
        assert!(result.is_err());
        assert_eq!(sc.pos(), 0);
    }

    #[test]
    fn or_takes_first_match() {
        let mut sc = Scanner::for_str("{x}");
        let got = sc.or(&mut [
            &mut |sc: &mut Scanner<'_>| sc.match_rune('x').map(|_| 1),
            &mut |sc: &mut Scanner<'_>| {
                sc.match_rune('{')?;
                sc.match_rune('y')?;
                Ok(2)
            },
            &mut |sc: &mut Scanner<'_>| {
                sc.match_rune('{')?;
                sc.match_rune('x')?;
                Ok(3)
            },
        ]);
        assert_eq!(got, Ok(3));
        assert_eq!(sc.pos(), 2);
    }

    #[test]
    fn repeat_counts_and_honors_min() {
        let mut sc = Scanner::for_str("aaab");
        assert_eq!(sc.repeat(1, |sc| sc.match_rune('a')), Ok(3));
        assert_eq!(sc.pos(), 3);

        let mut sc = Scanner::for_str("ab");
        assert!(sc.repeat(2, |sc| sc.match_rune('a')).is_err());
        assert_eq!(sc.pos(), 0);
    }

    #[test]
    fn repeat_stops_on_empty_match() {
        let mut sc = Scanner::for_str("abc");
        assert_eq!(sc.repeat(0, |_| Ok(())), Ok(1));
        assert_eq!(sc.pos(), 0);
    }

    #[test]
    fn invalid_bytes_are_stepped_one_by_one() {
        let mut sc = Scanner::new(&[0xFF, 0xFE, b'a']);
        assert_eq!(sc.read_rune(), Ok(char::REPLACEMENT_CHARACTER));
        assert_eq!(sc.pos(), 1);
        assert_eq!(sc.repeat(0, |sc| sc.read_rune().map(drop)), Ok(2));
        assert!(sc.is_eof());
    }
}
