//! Toolbar variable declarations and substitution
//!
//! A part holding a single `$name=value` or `~name=value` arg declares a variable. Rows read
//! settings such as `$font` or `$terminal` from these, and `~name` declarations extend the
//! home vars used to abbreviate file names.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::document::{Document, Token};
use super::varrefs::{VarRef, VarRefScanner};

static DECL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^([$~][a-zA-Z0-9_]+)=(.*)$").unwrap());

/// Declared variables by name (sigil included).
pub type VarMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    pub value: String,
}

/// Parse `[$~]name=value`. Quoted values are unquoted; malformed quotes are kept verbatim.
pub fn parse_var_decl(arg: &Token) -> Option<VarDecl> {
    let caps = DECL_REGEX.captures(&arg.text)?;
    let name = caps.get(1)?.as_str().to_string();
    let raw = caps.get(2)?;
    let value = Token::new(&arg.text, raw.start(), raw.end()).unquoted();
    Some(VarDecl { name, value })
}

/// Collect the declarations of `doc`, later declarations overriding earlier ones.
///
/// `~` values have references to already declared variables expanded, so `~a=~b/sub` works
/// when `~b` is declared first.
pub fn parse_vars(doc: &Document, scanner: &VarRefScanner) -> VarMap {
    let mut vars = VarMap::new();
    for part in &doc.parts {
        let [arg] = part.args.as_slice() else {
            continue;
        };
        let Some(mut decl) = parse_var_decl(arg) else {
            continue;
        };
        if decl.name.starts_with('~') {
            let refs = scanner.scan_str(&decl.value);
            decl.value = expand_var_refs(&decl.value, &refs, |name| vars.get(name).cloned());
        }
        debug!(name = %decl.name, value = %decl.value, "toolbar var");
        vars.insert(decl.name, decl.value);
    }
    vars
}

/// Replace each of `refs` in `source` with `lookup(name)`.
///
/// References the lookup does not know are left as written. `refs` must come from scanning
/// `source` and be in order.
pub fn expand_var_refs<F>(source: &str, refs: &[VarRef], mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(source.len());
    let mut last = 0;
    for var in refs {
        if var.start < last || var.end > source.len() {
            continue;
        }
        if let Some(value) = lookup(&var.name) {
            out.push_str(&source[last..var.start]);
            out.push_str(&value);
            last = var.end;
        }
    }
    out.push_str(&source[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ScanOptions;
    use crate::toolbar::Tokenizer;

    fn options() -> ScanOptions {
        ScanOptions::default().with_escape('\\')
    }

    fn vars_of(source: &str) -> VarMap {
        let doc = Tokenizer::new(options()).tokenize(source);
        parse_vars(&doc, &VarRefScanner::new(options()))
    }

    #[test]
    fn declarations_need_a_single_arg() {
        let vars = vars_of("~/a.go | $font=mono | $x=1 extra | Save");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["$font"], "mono");
    }

    #[test]
    fn quoted_value_is_unquoted() {
        let vars = vars_of(r#"name | $font="Go Mono,14" | $y='a'"#);
        assert_eq!(vars["$font"], "Go Mono,14");
        assert_eq!(vars["$y"], "a");
    }

    #[test]
    fn empty_value_and_override() {
        let vars = vars_of("n | $a= | $b=1 | $b=2");
        assert_eq!(vars["$a"], "");
        assert_eq!(vars["$b"], "2");
    }

    #[test]
    fn tilde_values_expand_earlier_vars() {
        let vars = vars_of("n | ~src=/home/u/src | ~app=~src/app | ~lib=~nope/lib");
        assert_eq!(vars["~app"], "/home/u/src/app");
        assert_eq!(vars["~lib"], "~nope/lib");
    }

    #[test]
    fn not_declarations() {
        for src in ["n | $=1", "n | font=1", "n | $a-b=1", "n | =x"] {
            assert!(vars_of(src).is_empty(), "{src}");
        }
    }

    #[test]
    fn expand_replaces_known_refs_only() {
        let src = "$HOME/${USER}/$MISSING/x";
        let refs = VarRefScanner::new(options()).scan_str(src);
        let out = expand_var_refs(src, &refs, |name| match name {
            "$HOME" => Some("/home/u".to_string()),
            "$USER" => Some("u".to_string()),
            _ => None,
        });
        assert_eq!(out, "/home/u/u/$MISSING/x");
    }

    #[test]
    fn expand_without_refs_is_identity() {
        assert_eq!(expand_var_refs("abc", &[], |_| None), "abc");
    }
}
