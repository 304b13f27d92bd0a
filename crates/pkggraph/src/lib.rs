//! Package build-plan dependency graph.
//!
//! This crate provides the graph model consumed by the analytics engine and
//! a loader for the line-oriented JSON graph description format.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod graph;
pub mod node;
pub mod reader;

pub use error::{Error, Result};
pub use graph::PkgGraph;
pub use node::{NO_SRPM_PATH, NodeState, NodeType, PkgNode, VersionedPkg};
pub use petgraph::graph::NodeIndex;
pub use reader::{read_graph, read_graph_file};
