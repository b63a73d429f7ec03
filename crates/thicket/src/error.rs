use std::{io, result::Result as StdResult};

use thiserror::Error;

use crate::id::NodeId;

/// Result type for thicket operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// Child lookup outside `[0, count)`.
    #[error("invalid index {index} (component count {count})")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of children at the time of the lookup.
        count: usize,
    },

    /// Attaching `child` under `parent` would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCreateCycle {
        /// Container that was asked to take the child.
        parent: NodeId,
        /// Component that already contains the parent.
        child: NodeId,
    },

    #[error("focus: {0}")]
    /// Focus-related failure.
    Focus(String),
    #[error("listener: {0}")]
    /// A container listener reported a failure.
    Listener(String),
    #[error("internal: {0}")]
    /// Internal error.
    Internal(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Internal(e.to_string())
    }
}
