//! Immutable-after-load package dependency graph backed by petgraph.
//!
//! # Edge Direction
//!
//! Edges point from **dependent -> dependency**: the source node requires the
//! target node. So:
//! - `Direction::Outgoing` from a node yields what it depends on
//! - `Direction::Incoming` into a node yields who depends on it

use crate::error::{Error, Result};
use crate::node::{NodeType, PkgNode};
use petgraph::Direction;
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed graph of package nodes.
///
/// Nodes are addressed by their string id when building the graph and by
/// [`NodeIndex`] once built. There is no removal: the analytics engine only
/// ever reads a fully constructed graph.
#[derive(Debug, Default, Clone)]
pub struct PkgGraph {
    graph: DiGraph<PkgNode, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl PkgGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if a node with the same id exists.
    pub fn add_node(&mut self, node: PkgNode) -> Result<NodeIndex> {
        if self.node_map.contains_key(&node.id) {
            return Err(Error::DuplicateNode {
                line: 0,
                id: node.id,
            });
        }

        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_map.insert(id, idx);
        Ok(idx)
    }

    /// Record that `dependent` requires `dependency`.
    ///
    /// Adding the same edge twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either id is missing, or
    /// [`Error::SelfDependency`] if both ids are the same.
    pub fn add_edge(&mut self, dependent: &str, dependency: &str) -> Result<()> {
        if dependent == dependency {
            return Err(Error::SelfDependency {
                line: 0,
                id: dependent.to_string(),
            });
        }

        let from = self.index_of(dependent)?;
        let to = self.index_of(dependency)?;
        self.graph.update_edge(from, to, ());
        Ok(())
    }

    fn index_of(&self, id: &str) -> Result<NodeIndex> {
        self.node_map
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownNode {
                line: 0,
                id: id.to_string(),
            })
    }

    /// Look up a node index by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// Access a node by index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not belong to this graph.
    #[must_use]
    pub fn node(&self, idx: NodeIndex) -> &PkgNode {
        &self.graph[idx]
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate every node in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &PkgNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Iterate every run-time requirement node.
    pub fn run_nodes(&self) -> impl Iterator<Item = (NodeIndex, &PkgNode)> + '_ {
        self.nodes()
            .filter(|(_, node)| node.node_type == NodeType::Run)
    }

    /// Nodes that depend on `idx` (incoming edges).
    pub fn dependents(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, &PkgNode)> + '_ {
        self.neighbors(idx, Direction::Incoming)
    }

    /// Nodes that `idx` depends on (outgoing edges).
    pub fn dependencies(
        &self,
        idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, &PkgNode)> + '_ {
        self.neighbors(idx, Direction::Outgoing)
    }

    fn neighbors(
        &self,
        idx: NodeIndex,
        direction: Direction,
    ) -> impl Iterator<Item = (NodeIndex, &PkgNode)> + '_ {
        self.graph
            .neighbors_directed(idx, direction)
            .map(move |n| (n, &self.graph[n]))
    }

    /// Returns `true` if the graph has no dependency cycles.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        !algo::is_cyclic_directed(&self.graph)
    }
}
