use std::path::PathBuf;

use glake_parser::position::RangeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("not a file url: {0}")]
    NotAFileUrl(String),
    #[error("not an absolute path: {}", .0.display())]
    RelativePath(PathBuf),
    #[error("edit at bytes {second_start}..{second_end} overlaps edit ending at byte {first_end}")]
    OverlappingEdits {
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },
    #[error("range end {end:?} is before its start {start:?}")]
    EndBeforeStart {
        start: lsp_types::Position,
        end: lsp_types::Position,
    },
}
