//! Error types for scanning

use thiserror::Error;

/// Failure of a single scanning step.
///
/// These drive backtracking and are never surfaced by the tokenizer or the var ref scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The step did not match at the given position.
    #[error("no match at byte {pos}")]
    NoMatch { pos: usize },
    /// The step needed more input but the cursor is at the end.
    #[error("unexpected end of input at byte {pos}")]
    Eof { pos: usize },
}

impl ScanError {
    pub fn pos(&self) -> usize {
        match self {
            ScanError::NoMatch { pos } | ScanError::Eof { pos } => *pos,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, ScanError::Eof { .. })
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
