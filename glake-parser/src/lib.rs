//! # glake-parser
//!
//! Parsing and positional indexing for the glake editor toolbar and its LSP bridge.
//!
//! File Layout
//!
//!     The crate is split by concern, leaves first:
//!
//!     src/
//!       ├── scan        Position-tracked byte cursor with backtracking combinators
//!       ├── toolbar     Tokenizer (parts/args), var refs, var declarations, home vars
//!       ├── position    UTF-8 byte offsets <-> UTF-16 line/character positions
//!       └── testing     Fluent assertions over tokenized documents
//!
//!     Nothing in here touches the screen, a process or a socket. Callers hand in a string or a
//!     [`position::ByteSource`] and get value objects back.
//!
//! Error Policy
//!
//!     The tokenizer and the var ref scanner are total: live-edited toolbar text is frequently
//!     half-typed, so malformed input degrades to literal runs instead of failing. Only the
//!     position translator reports errors ([`position::RangeError`]), since a position that does
//!     not exist in the buffer must never be applied.

pub mod position;
pub mod scan;
pub mod testing;
pub mod toolbar;

pub use position::{ByteSource, OffsetTranslator, Position, Range, RangeError};
pub use scan::{ScanOptions, Scanner};
pub use toolbar::{tokenize, Document, Part, Token, VarRef, VarRefScanner};
