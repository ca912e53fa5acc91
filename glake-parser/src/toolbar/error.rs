//! Error types for toolbar edits

use thiserror::Error;

/// Rejections raised when an edit would desynchronize the toolbar from its row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolbarError {
    /// The edited toolbar no longer has a first arg to use as the name.
    #[error("unable to get toolbar name")]
    MissingName,
    /// The edited toolbar names a different file than the row it belongs to.
    #[error("can't change toolbar name: {expected:?} -> {found:?}")]
    NameChanged { expected: String, found: String },
}
