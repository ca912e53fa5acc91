//! Fluent assertions over tokenized documents
//!
//!     Tokenizer tests care about two things at once: what text each arg holds and where it
//!     sits in the source. Spelling both out by indexing `doc.parts[i].args[j]` gets noisy
//!     fast, and a failing index panics without saying what the document looked like.
//!
//!     [`assert_doc`] wraps a [`Document`] and lets a test state only what it cares about. Every
//!     failure message carries a path such as `parts[1].args[0]` and a listing of the document.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use glake_parser::testing::assert_doc;
//!     use glake_parser::tokenize;
//!
//!     let doc = tokenize(r#"a "b|c" d|e"#);
//!     assert_doc(&doc)
//!         .part_count(2)
//!         .name("a")
//!         .part(0, |p| {
//!             p.span(0, 9).arg_count(3).arg(1, r#""b|c""#, 2, 7);
//!         })
//!         .part(1, |p| {
//!             p.args(&["e"]);
//!         });
//!     ```
//!
//!     The module is public so integration tests and downstream crates can use it too.

mod assertions;

pub use assertions::{DocumentAssertion, PartAssertion};

use crate::toolbar::Document;

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}
