//! Error types for the container layer.

use thiserror::Error;

/// Errors that can occur in container operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// `remove` was asked for a value with zero occurrences. The element
    /// sequence and the version counter are left untouched.
    #[error("element not found in container")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, ContainerError>;
