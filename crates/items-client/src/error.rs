//! Client Errors
//!
//! A request either reaches the backend and is rejected, or it never
//! produces a usable response at all.

use std::fmt;
use thiserror::Error;

pub type ItemResult<T> = Result<T, ItemError>;

/// Which request an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Toggle,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load items",
            Operation::Create => "create item",
            Operation::Toggle => "update item",
            Operation::Delete => "delete item",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    /// Backend answered with a non-2xx status
    #[error("failed to {operation}: server responded {status}")]
    Rejected { operation: Operation, status: u16 },
    /// Connection error, or a 2xx body that could not be decoded
    #[error("failed to {operation}: {message}")]
    Transport { operation: Operation, message: String },
}

impl ItemError {
    pub fn operation(&self) -> Operation {
        match self {
            ItemError::Rejected { operation, .. } | ItemError::Transport { operation, .. } => {
                *operation
            }
        }
    }

    pub(crate) fn transport(operation: Operation, err: impl fmt::Display) -> Self {
        ItemError::Transport {
            operation,
            message: err.to_string(),
        }
    }
}
