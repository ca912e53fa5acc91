//! Byte scanner with backtracking combinators
//!
//!     The [`Scanner`] is a cursor over a byte slice. Every `match_*` method either consumes
//!     input and succeeds, or leaves the cursor where it was and fails with
//!     [`ScanError::NoMatch`]. On top of those primitives sit the combinators ([`Scanner::and`],
//!     [`Scanner::or`], [`Scanner::repeat`], [`Scanner::attempt`]) which restore the cursor from a
//!     [`Checkpoint`] on failure, so grammar rules can be written declaratively and composed.
//!
//!     Quoting and escaping rules live in [`runes`] and are shared by the tokenizer and the var
//!     ref scanner.

mod error;
pub mod runes;
mod scanner;

pub use error::{ScanError, ScanResult};
pub use runes::{decode_rune, is_quote, DEFAULT_ESCAPE_RUNE};
pub use scanner::{Checkpoint, Scanner, Step};

use serde::{Deserialize, Serialize};

/// Limits and the escape rune shared by every scanning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Rune that makes the next rune literal.
    pub escape: char,
    /// Longest quoted run (in bytes) the scanner will try to close.
    pub max_quoted_len: usize,
    /// Longest variable name (in bytes) matched after a sigil.
    pub max_name_len: usize,
}

impl ScanOptions {
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            escape: DEFAULT_ESCAPE_RUNE,
            max_quoted_len: 3000,
            max_name_len: 100,
        }
    }
}
