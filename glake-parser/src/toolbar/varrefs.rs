//! Variable references inside toolbar text
//!
//!     A reference is a sigil (`$` or `~`) followed by a name, optionally in braces:
//!     `$HOME`, `${HOME}`, `~0`, `~{proj}`. Names are `[a-zA-Z0-9_]+`.
//!
//!     Scanning tries, at every position and in this order:
//!
//!         1. an escaped rune, skipped
//!         2. a quoted string, skipped (quoting is how a user opts out of substitution)
//!         3. a reference, recorded
//!         4. any single rune, skipped
//!
//!     so there is no failing input: whatever does not match is stepped over.

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::scan::{ScanOptions, ScanResult, Scanner};

/// Variable name pattern; anchoring is done by the scanner.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9_]+").unwrap());

const SIGILS: &[char] = &['$', '~'];

/// Escape rune inside quoted strings, independent of the platform escape rune.
const QUOTE_ESCAPE: char = '\\';

/// A `$name` / `~name` reference. `name` keeps the sigil but not the braces; the span covers
/// both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VarRef {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

impl VarRef {
    pub fn sigil(&self) -> char {
        self.name.chars().next().unwrap_or('$')
    }

    pub fn is_braced(&self) -> bool {
        self.end - self.start > self.name.len()
    }
}

/// Finds variable references. Holds only its options, so one instance can be shared by every
/// caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarRefScanner {
    options: ScanOptions,
}

impl VarRefScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn scan_str(&self, src: &str) -> Vec<VarRef> {
        self.scan(src.as_bytes())
    }

    pub fn scan<'a>(&self, src: &'a [u8]) -> Vec<VarRef> {
        let escape = self.options.escape;
        let max_quoted = self.options.max_quoted_len;
        let mut refs = Vec::new();
        let mut sc = Scanner::new(src);
        let result = sc.repeat(0, |sc| {
            sc.or(&mut [
                &mut |sc: &mut Scanner<'a>| sc.match_escape_any(escape).map(drop),
                &mut |sc: &mut Scanner<'a>| sc.match_quoted_string(QUOTE_ESCAPE, max_quoted).map(drop),
                &mut |sc: &mut Scanner<'a>| {
                    let var = self.var_ref(sc)?;
                    refs.push(var);
                    Ok(())
                },
                &mut |sc: &mut Scanner<'a>| sc.read_rune().map(drop),
            ])
        });
        if let Err(err) = result {
            trace!(%err, "var ref scan stopped early");
        }
        refs
    }

    fn var_ref<'a>(&self, sc: &mut Scanner<'a>) -> ScanResult<VarRef> {
        let max_name = self.options.max_name_len;
        let start = sc.mark();
        sc.attempt(|sc| {
            let sigil = sc.match_rune_one_of(SIGILS)?;
            let name = sc.or(&mut [
                &mut |sc: &mut Scanner<'a>| {
                    sc.match_rune('{')?;
                    let name = sc.match_regex_from_start(&NAME_REGEX, max_name)?;
                    sc.match_rune('}')?;
                    Ok(name)
                },
                &mut |sc: &mut Scanner<'a>| sc.match_regex_from_start(&NAME_REGEX, max_name),
            ])?;
            Ok(VarRef {
                name: format!(
                    "{}{}",
                    String::from_utf8_lossy(sigil),
                    String::from_utf8_lossy(name)
                ),
                start: start.pos(),
                end: sc.pos(),
            })
        })
    }
}
