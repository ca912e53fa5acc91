//! LSP bridge for the glake buffer model
//!
//!     glake buffers are UTF-8 and byte addressed. Language servers speak LSP, where positions are
//!     0-based lines and UTF-16 code unit columns, and documents are named by `file://` URLs.
//!     This crate is the one place where those two worlds meet; the JSON-RPC transport and the
//!     server processes live elsewhere.
//!
//! Design Decision: lsp-types only
//!
//!     The bridge depends on `lsp-types` for the protocol values and nothing else from the LSP
//!     ecosystem. There is no async runtime and no transport here: every function is a pure
//!     conversion over a buffer snapshot, so it can be called from the editor's UI thread or from
//!     a transport task alike.
//!
//! Pieces
//!
//!     1. Conversions ([`convert`]):
//!         - [`to_lsp_position`] / [`from_lsp_position`], [`to_lsp_range`] / [`from_lsp_range`]
//!         - [`offset_to_lsp_position`], [`lsp_range_to_offsets`], [`offsets_to_lsp_range`]
//!
//!     2. Text edits ([`edits`]):
//!         - [`apply_text_edits`]: translates every edit against the original buffer first,
//!           rejects overlapping edits, then applies them back to front
//!
//!     3. File URLs ([`url`]):
//!         - [`url_to_abs_filename`] / [`abs_filename_to_url`]
//!
//! Errors
//!
//!     Everything fails with [`BridgeError`]. A failure concerns only the request at hand: the
//!     caller drops that request and carries on.

pub mod convert;
pub mod edits;
mod error;
pub mod url;

pub use convert::{
    from_lsp_position, from_lsp_range, lsp_range_to_offsets, offset_to_lsp_position,
    offsets_to_lsp_range, to_lsp_position, to_lsp_range,
};
pub use edits::{apply_text_edits, resolve_text_edits, TextEditSpan};
pub use error::BridgeError;
pub use url::{abs_filename_to_url, url_to_abs_filename};
