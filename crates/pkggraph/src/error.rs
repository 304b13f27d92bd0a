//! Error types for pkggraph operations.

use std::io;
use thiserror::Error;

/// The error type for graph construction and loading.
///
/// Loader errors carry the 1-based line number of the offending record so
/// a broken graph description can be fixed without guessing.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading the graph description.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line could not be parsed as a graph record.
    #[error("line {line}: malformed record: {source}")]
    Json {
        /// Line the record was read from.
        line: usize,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A node id was declared more than once.
    #[error("line {line}: duplicate node id '{id}'")]
    DuplicateNode {
        /// Line of the second declaration (0 when added programmatically).
        line: usize,
        /// The repeated id.
        id: String,
    },

    /// An edge referenced a node that has not been declared.
    #[error("line {line}: edge references unknown node '{id}'")]
    UnknownNode {
        /// Line of the edge record (0 when added programmatically).
        line: usize,
        /// The unknown id.
        id: String,
    },

    /// An edge pointed from a node to itself.
    #[error("line {line}: node '{id}' cannot depend on itself")]
    SelfDependency {
        /// Line of the edge record (0 when added programmatically).
        line: usize,
        /// The node id.
        id: String,
    },

    /// The graph description is structurally invalid.
    #[error("Invalid graph format: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Attach a line number to a graph construction error.
    ///
    /// Errors raised by [`crate::PkgGraph`] itself do not know which record
    /// they came from; the loader fills the line in afterwards.
    #[must_use]
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::DuplicateNode { id, .. } => Self::DuplicateNode { line, id },
            Self::UnknownNode { id, .. } => Self::UnknownNode { line, id },
            Self::SelfDependency { id, .. } => Self::SelfDependency { line, id },
            other => other,
        }
    }
}

/// A specialized Result type for pkggraph operations.
pub type Result<T> = std::result::Result<T, Error>;
