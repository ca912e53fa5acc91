//! Part/arg splitting
//!
//!     The splitter is a one-rune lookback state machine:
//!
//!         - the escape rune marks the next rune as literal (no split, no quote toggle)
//!         - a quote rune opens a quoted run that only the same rune closes
//!         - outside quotes, a separator rune ends the current token
//!
//!     Parts are split at `|` and `\n`; each part is then split at spaces with a fresh state
//!     machine. Blank args are dropped, parts never are: `"|||"` has four empty parts.
//!
//!     Tokenizing is total. An unterminated quote simply runs to the end of the string.

use std::ops::Range;

use tracing::trace;

use super::document::{Document, Part, Token};
use super::error::ToolbarError;
use crate::scan::{is_quote, ScanOptions};

const PART_SEPARATORS: &[char] = &['|', '\n'];
const ARG_SEPARATORS: &[char] = &[' '];

/// Tokenize with the default options for this platform.
pub fn tokenize(source: &str) -> Document {
    Tokenizer::default().tokenize(source)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    options: ScanOptions,
}

impl Tokenizer {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
    pub fn tokenize(&self, source: &str) -> Document {
        let parts: Vec<Part> = self
            .split(source, 0..source.len(), PART_SEPARATORS)
            .into_iter()
            .map(|span| {
                let args = self
                    .split(source, span.clone(), ARG_SEPARATORS)
                    .into_iter()
                    .map(|arg| Token::new(source, arg.start, arg.end))
                    .filter(|arg| !arg.is_blank())
                    .collect();
                Part {
                    token: Token::new(source, span.start, span.end),
                    args,
                }
            })
            .collect();
        trace!(parts = parts.len(), "tokenized toolbar");
        Document {
            source: source.to_string(),
            parts,
        }
    }

    /// Reparse an edited toolbar, rejecting the edit if the name no longer matches
    /// `expected_name` (the encoded file name of the row).
    pub fn validate_name_edit(
        &self,
        new_source: &str,
        expected_name: &str,
    ) -> Result<Document, ToolbarError> {
        let doc = self.tokenize(new_source);
        let found = doc
            .part0_arg0()
            .ok_or(ToolbarError::MissingName)?
            .unquoted();
        if found != expected_name {
            return Err(ToolbarError::NameChanged {
                expected: expected_name.to_string(),
                found,
            });
        }
        Ok(doc)
    }

    /// Split `source[span]` at `separators`, returning absolute sub-spans.
    ///
    /// The trailing span is always emitted, even when empty.
    fn split(&self, source: &str, span: Range<usize>, separators: &[char]) -> Vec<Range<usize>> {
        let mut state = SplitState::new(self.options.escape);
        let mut spans = Vec::new();
        let mut start = span.start;
        for (i, ru) in source[span.clone()].char_indices() {
            if state.is_split(ru, separators) {
                let at = span.start + i;
                spans.push(start..at);
                start = at + ru.len_utf8();
            }
        }
        spans.push(start..span.end);
        spans
    }
}

struct SplitState {
    escape: char,
    escaped: bool,
    quote: Option<char>,
}

impl SplitState {
    fn new(escape: char) -> Self {
        Self {
            escape,
            escaped: false,
            quote: None,
        }
    }

    fn is_split(&mut self, ru: char, separators: &[char]) -> bool {
        if self.escaped {
            self.escaped = false;
            return false;
        }
        if ru == self.escape {
            self.escaped = true;
            return false;
        }
        if let Some(quote) = self.quote {
            if ru == quote {
                self.quote = None;
            }
            return false;
        }
        if is_quote(ru) {
            self.quote = Some(ru);
            return false;
        }
        separators.contains(&ru)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_doc;
    use rstest::rstest;

    fn backslash() -> Tokenizer {
        Tokenizer::new(ScanOptions::default().with_escape('\\'))
    }

    #[rstest]
    #[case("", vec![vec![]])]
    #[case("a", vec![vec!["a"]])]
    #[case("a  b", vec![vec!["a", "b"]])]
    #[case(" a b ", vec![vec!["a", "b"]])]
    #[case("a|b", vec![vec!["a"], vec!["b"]])]
    #[case("a\nb", vec![vec!["a"], vec!["b"]])]
    #[case("|||", vec![vec![], vec![], vec![], vec![]])]
    #[case("a||b", vec![vec!["a"], vec![], vec!["b"]])]
    #[case("a|", vec![vec!["a"], vec![]])]
    #[case(r#"a "b|c" d|e"#, vec![vec!["a", r#""b|c""#, "d"], vec!["e"]])]
    #[case("a `b c`|d", vec![vec!["a", "`b c`"], vec!["d"]])]
    #[case("a 'b c' d", vec![vec!["a", "'b c'", "d"]])]
    #[case("«a|b« c", vec![vec!["«a|b«", "c"]])]
    #[case("«a|b» c", vec![vec!["«a|b» c"]])]
    #[case(r"a\|b", vec![vec![r"a\|b"]])]
    #[case(r"a\ b", vec![vec![r"a\ b"]])]
    #[case(r#""a\"|b""#, vec![vec![r#""a\"|b""#]])]
    #[case(r#"a "b|c"#, vec![vec!["a", r#""b|c"#]])]
    #[case("a\\", vec![vec!["a\\"]])]
    #[case("a\tb", vec![vec!["a\tb"]])]
    fn splits(#[case] source: &str, #[case] expected: Vec<Vec<&str>>) {
        let doc = backslash().tokenize(source);
        let got: Vec<Vec<&str>> = doc.parts.iter().map(|p| p.args_strs()).collect();
        assert_eq!(got, expected, "source {:?}", source);
    }

    #[test]
    fn quoted_separator_spans() {
        let doc = backslash().tokenize(r#"a "b|c" d|e"#);
        assert_doc(&doc)
            .part_count(2)
            .part(0, |p| {
                p.span(0, 9)
                    .arg_count(3)
                    .arg(0, "a", 0, 1)
                    .arg(1, r#""b|c""#, 2, 7)
                    .arg(2, "d", 8, 9);
            })
            .part(1, |p| {
                p.span(10, 11).arg(0, "e", 10, 11);
            });
    }

    #[test]
    fn empty_parts_have_separator_offsets() {
        let doc = backslash().tokenize("|||");
        assert_doc(&doc)
            .part_count(4)
            .part(0, |p| {
                p.span(0, 0).arg_count(0);
            })
            .part(3, |p| {
                p.span(3, 3).arg_count(0);
            });
    }

    #[test]
    fn escaped_separator_is_one_arg() {
        let doc = backslash().tokenize(r"a\|b");
        assert_doc(&doc).part_count(1).part(0, |p| {
            p.arg_count(1).arg(0, r"a\|b", 0, 4);
        });
    }

    #[test]
    fn escaped_escape_does_not_escape_separator() {
        let doc = backslash().tokenize(r"a\\|b");
        assert_doc(&doc).part_count(2).part(0, |p| {
            p.arg(0, r"a\\", 0, 3);
        });
    }

    #[test]
    fn caret_escape() {
        let tok = Tokenizer::new(ScanOptions::default().with_escape('^'));
        let doc = tok.tokenize(r"a^|b\|c");
        assert_doc(&doc)
            .part_count(2)
            .part(0, |p| {
                p.arg(0, r"a^|b\", 0, 5);
            })
            .part(1, |p| {
                p.arg(0, "c", 6, 7);
            });
    }

    #[test]
    fn multibyte_offsets() {
        let doc = backslash().tokenize("été|ñ x");
        assert_doc(&doc)
            .part_count(2)
            .part(0, |p| {
                p.span(0, 5).arg(0, "été", 0, 5);
            })
            .part(1, |p| {
                p.span(6, 10).arg(0, "ñ", 6, 8).arg(1, "x", 9, 10);
            });
    }

    #[test]
    fn validate_name_edit_accepts_same_name() {
        let doc = backslash()
            .validate_name_edit("~/a.txt | Save | Find x", "~/a.txt")
            .unwrap();
        assert_eq!(doc.parts.len(), 3);
    }

    #[test]
    fn validate_name_edit_unquotes_name() {
        assert!(backslash()
            .validate_name_edit(r#""/a b.txt" | Save"#, "/a b.txt")
            .is_ok());
    }

    #[test]
    fn validate_name_edit_rejects_changes() {
        assert_eq!(
            backslash().validate_name_edit("~/b.txt | Save", "~/a.txt"),
            Err(ToolbarError::NameChanged {
                expected: "~/a.txt".to_string(),
                found: "~/b.txt".to_string(),
            })
        );
        assert_eq!(
            backslash().validate_name_edit(" | Save", "~/a.txt"),
            Err(ToolbarError::MissingName)
        );
    }
}
