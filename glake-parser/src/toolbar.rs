//! Toolbar text: parts, args and variables
//!
//!     A toolbar line such as `~/src/main.go | Save | Find "a|b"` is split into parts at `|` and
//!     newlines, and each part into args at spaces. Quotes and the escape rune keep separators
//!     literal. Every token carries byte offsets into the original string so callers can slice
//!     the source, rewrite a token in place, or recover separator positions.
//!
//!     Pieces:
//!         - [`tokenizer`]: the part/arg splitter ([`tokenize`], [`Tokenizer`])
//!         - [`document`]: [`Token`], [`Part`], [`Document`] and their queries
//!         - [`varrefs`]: `$name`, `${name}`, `~name`, `~{name}` references ([`VarRefScanner`])
//!         - [`vars`]: `$name=value` declarations and the substitution pass
//!         - [`homevars`]: `~` style path abbreviations for the toolbar name
//!         - [`unquote`]: stripping one layer of quoting from an arg

pub mod document;
mod error;
pub mod homevars;
pub mod tokenizer;
pub mod unquote;
pub mod varrefs;
pub mod vars;

pub use document::{Document, Part, Token};
pub use error::ToolbarError;
pub use homevars::{HomeVar, HomeVars};
pub use tokenizer::{tokenize, Tokenizer};
pub use unquote::{unquote, UnquoteError};
pub use varrefs::{VarRef, VarRefScanner};
pub use vars::{expand_var_refs, parse_var_decl, parse_vars, VarDecl, VarMap};
