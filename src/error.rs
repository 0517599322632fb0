//! Error types shared by the sequence operations.

use thiserror::Error;

/// Everything that can go wrong when sorting or scanning a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// An extremum was requested from a sequence without elements.
    #[error("{op} called on an empty sequence")]
    Empty { op: &'static str },

    /// Two elements have no defined order relative to each other, eg. a NaN float.
    /// `left` and `right` are positions in the sequence as it was at the time of the comparison.
    #[error("elements at positions {left} and {right} are not comparable")]
    Incomparable { left: usize, right: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;
