//! Traversal strategies feeding the blocking reports.
//!
//! Every strategy visits each node of the graph once as an anchor, looks at
//! the nodes related to it under its own policy, and records
//! `(key, dependency-unit)` pairs in a private [`Aggregation`]. Strategies
//! share nothing but the read-only graph, so they can run on any thread.
//!
//! | Strategy | Anchors | Walk | Key | Value |
//! |----------|---------|------|-----|-------|
//! | [`direct_unresolved`] | unresolved run nodes | incoming, one hop | anchor package | dependent unit |
//! | [`indirect_unresolved`] | available run/build nodes | outgoing, transitive | unresolved package | anchor unit |
//! | [`direct_closest_to_unblocked`] | available build nodes | outgoing, one hop | anchor SRPM | dependency unit |
//! | [`indirect_closest_to_unblocked`] | available build nodes | outgoing, transitive | anchor SRPM | dependency unit |
//!
//! An anchor with no qualifying relation adds nothing; there are no
//! zero-count keys.

use crate::aggregate::Aggregation;
use crate::identity::{dependency_unit_name, srpm_base_name};
use pkggraph::{NodeIndex, NodeState, NodeType, PkgGraph, PkgNode};
use std::collections::{HashSet, VecDeque};

/// Visit every node reachable from `start` over outgoing edges, `start` included.
///
/// Breadth-first with a visited set: each node is visited exactly once, so
/// the walk terminates even on a cyclic graph.
fn walk_breadth_first<'g>(
    graph: &'g PkgGraph,
    start: NodeIndex,
    mut visit: impl FnMut(&'g PkgNode),
) {
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        visit(graph.node(current));

        for (next, _) in graph.dependencies(current) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
}

/// A build node that can be traversed from: it has a package behind it.
fn is_buildable_anchor(node: &PkgNode) -> bool {
    node.node_type == NodeType::Build && node.state != NodeState::Unresolved
}

/// Unresolved packages keyed to the units that directly require them.
///
/// Goal nodes are synthetic targets and are never counted as dependents.
#[must_use]
pub fn direct_unresolved(graph: &PkgGraph) -> Aggregation {
    let mut dependents_of = Aggregation::new();

    for (idx, node) in graph.run_nodes() {
        if node.state != NodeState::Unresolved {
            continue;
        }

        let pkg_name = &node.versioned_pkg.name;
        for (_, dependent) in graph.dependents(idx) {
            if dependent.node_type == NodeType::Goal {
                continue;
            }

            dependents_of.insert_if_absent(pkg_name, dependency_unit_name(dependent));
        }
    }

    dependents_of
}

/// Unresolved packages keyed to every unit that transitively requires them.
#[must_use]
pub fn indirect_unresolved(graph: &PkgGraph) -> Aggregation {
    let mut dependents_of = Aggregation::new();

    for (idx, node) in graph.nodes() {
        if !matches!(node.node_type, NodeType::Run | NodeType::Build) {
            continue;
        }
        if node.state == NodeState::Unresolved {
            continue;
        }

        let dependent_name = dependency_unit_name(node);
        tracing::trace!(anchor = %node, "Walking for unresolved dependencies");
        walk_breadth_first(graph, idx, |reached| {
            if reached.state == NodeState::Unresolved {
                dependents_of.insert_if_absent(&reached.versioned_pkg.name, dependent_name);
            }
        });
    }

    dependents_of
}

/// SRPMs keyed to the units they directly need that are not available yet.
///
/// Requirements produced by the anchor's own SRPM are skipped.
#[must_use]
pub fn direct_closest_to_unblocked(graph: &PkgGraph) -> Aggregation {
    let mut blocked_by = Aggregation::new();

    for (idx, node) in graph.nodes() {
        if !is_buildable_anchor(node) {
            continue;
        }

        let pkg_srpm = srpm_base_name(node);
        for (_, dependency) in graph.dependencies(idx) {
            if !dependency.state.is_unavailable() {
                continue;
            }
            if srpm_base_name(dependency) == pkg_srpm {
                continue;
            }

            blocked_by.insert_if_absent(pkg_srpm, dependency_unit_name(dependency));
        }
    }

    blocked_by
}

/// SRPMs keyed to every unavailable unit in their transitive closure.
///
/// The same-SRPM filter applies at every visited node, not just the anchor.
/// A filtered node is still walked through, so its own requirements count.
#[must_use]
pub fn indirect_closest_to_unblocked(graph: &PkgGraph) -> Aggregation {
    let mut blocked_by = Aggregation::new();

    for (idx, node) in graph.nodes() {
        if !is_buildable_anchor(node) {
            continue;
        }

        let pkg_srpm = srpm_base_name(node);
        tracing::trace!(anchor = %node, "Walking for unmet dependencies");
        walk_breadth_first(graph, idx, |dependency| {
            if !dependency.state.is_unavailable() {
                return;
            }
            if srpm_base_name(dependency) == pkg_srpm {
                return;
            }

            blocked_by.insert_if_absent(pkg_srpm, dependency_unit_name(dependency));
        });
    }

    blocked_by
}
