//! Tokenized toolbar values
//!
//! All offsets are byte offsets into [`Document::source`]. Values are rebuilt on every parse
//! and never mutated afterwards.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::homevars::HomeVars;
use super::unquote::{unquote, UnquoteError};

/// A run of the source string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Build the token for `source[start..end]`.
    ///
    /// # Panics
    ///
    /// Panics if the range is not on char boundaries of `source`.
    pub fn new(source: &str, start: usize, end: usize) -> Self {
        Self {
            text: source[start..end].to_string(),
            start,
            end,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Strip one layer of quoting.
    pub fn unquote(&self) -> Result<String, UnquoteError> {
        unquote(&self.text)
    }

    /// Unquoted text, or the raw text when it is not a well-formed quoted string.
    pub fn unquoted(&self) -> String {
        self.unquote().unwrap_or_else(|_| self.text.clone())
    }

    /// Span between the quotes together with the unquoted value.
    pub fn unquote_span(&self) -> Option<(Range<usize>, String)> {
        let value = self.unquote().ok()?;
        // quotes accepted by `unquote` are all one byte wide
        Some((self.start + 1..self.end - 1, value))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One `|` or newline separated section of the toolbar, split into args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(flatten)]
    pub token: Token,
    pub args: Vec<Token>,
}

impl Part {
    pub fn start(&self) -> usize {
        self.token.start
    }

    pub fn end(&self) -> usize {
        self.token.end
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }

    pub fn args_strs(&self) -> Vec<&str> {
        self.args.iter().map(|a| a.text.as_str()).collect()
    }

    pub fn args_unquoted(&self) -> Vec<String> {
        self.args.iter().map(Token::unquoted).collect()
    }

    /// Raw text from arg `i` through the last arg, inner spacing preserved.
    ///
    /// Returns an empty string when `i` is past the last arg.
    pub fn from_arg_string(&self, i: usize) -> &str {
        match (self.args.get(i), self.args.last()) {
            (Some(first), Some(last)) => {
                &self.token.text[first.start - self.start()..last.end - self.start()]
            }
            _ => "",
        }
    }
}

/// Result of tokenizing a toolbar string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub source: String,
    pub parts: Vec<Part>,
}

impl Document {
    /// The part containing byte `index`.
    ///
    /// A part's end is inclusive here so that an index sitting on a separator, or at the end of
    /// the string, belongs to the part before it.
    pub fn part_at_index(&self, index: usize) -> Option<&Part> {
        self.parts
            .iter()
            .find(|p| p.start() <= index && index <= p.end())
    }

    /// First arg of the first part: the row name.
    pub fn part0_arg0(&self) -> Option<&Token> {
        self.parts.first().and_then(|p| p.args.first())
    }

    /// The separator rune following part `n` and its offset.
    pub fn separator_after(&self, n: usize) -> Option<(usize, char)> {
        let part = self.parts.get(n)?;
        let ru = self.source[part.end()..].chars().next()?;
        Some((part.end(), ru))
    }

    /// Source with the name token replaced by `replacement`.
    pub fn with_part0_arg0(&self, replacement: &str) -> String {
        match self.part0_arg0() {
            Some(tok) => splice(&self.source, tok.span(), replacement),
            None => self.source.clone(),
        }
    }

    /// Source with the name abbreviated through `home_vars`.
    pub fn with_part0_arg0_encoded(&self, home_vars: &HomeVars) -> String {
        match self.part0_arg0() {
            Some(tok) => self.with_part0_arg0(&home_vars.encode(&home_vars.decode(&tok.text))),
            None => self.source.clone(),
        }
    }

    /// Source with the name expanded through `home_vars`.
    pub fn with_part0_arg0_decoded(&self, home_vars: &HomeVars) -> String {
        match self.part0_arg0() {
            Some(tok) => self.with_part0_arg0(&home_vars.decode(&tok.text)),
            None => self.source.clone(),
        }
    }

    /// `name` followed by everything after the current name token.
    ///
    /// Anything before the old name (leading blanks) is dropped.
    pub fn with_name(&self, name: &str) -> String {
        let rest = self.part0_arg0().map_or(0, |tok| tok.end);
        format!("{}{}", name, &self.source[rest..])
    }

    /// Everything up to the end of the name token followed by `rest`.
    pub fn with_str_after_name(&self, rest: &str) -> Option<String> {
        let tok = self.part0_arg0()?;
        Some(format!("{}{}", &self.source[..tok.end], rest))
    }
}

fn splice(source: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(source.len() + replacement.len());
    out.push_str(&source[..span.start]);
    out.push_str(replacement);
    out.push_str(&source[span.end..]);
    out
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            writeln!(f, "part {} {}..{}", i, part.start(), part.end())?;
            for (j, arg) in part.args.iter().enumerate() {
                writeln!(f, "  arg {} {}..{} {}", j, arg.start, arg.end, arg.text)?;
            }
        }
        Ok(())
    }
}
