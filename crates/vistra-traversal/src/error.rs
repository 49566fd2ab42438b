//! Error types for the traversal layer.

use thiserror::Error;

/// Errors that can occur while driving a traversal iterator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The container was structurally mutated after this iterator was
    /// built. Checked before anything else on every access; further use
    /// of the iterator keeps failing the same way.
    #[error("container modified during iteration (expected version {expected}, observed {observed})")]
    StaleIteration { expected: u64, observed: u64 },

    /// The cursor sits at or past the end of the position list.
    #[error("iterator out of bounds (cursor {cursor}, length {len})")]
    OutOfRange { cursor: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TraversalError>;
