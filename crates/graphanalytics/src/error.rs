//! Error types for graph analysis.
//!
//! Analysis itself cannot fail: aggregation, ranking and rendering are total
//! over an in-memory graph. The only failure is not getting a graph at all,
//! and it is fatal before any report is produced.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for graph analysis.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for graph analysis.
#[derive(Debug, Error)]
pub enum Error {
    /// The input graph could not be loaded
    #[error("unable to load dependency graph '{}'", path.display())]
    GraphUnavailable {
        /// Graph file that was requested
        path: PathBuf,
        /// Loader failure
        #[source]
        source: pkggraph::Error,
    },
}
