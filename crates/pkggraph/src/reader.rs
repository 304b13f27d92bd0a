//! Graph description loading.
//!
//! A graph is persisted as JSON Lines: one record per line, tagged by
//! `"kind"`. Node records must precede the edges that reference them.
//!
//! ```text
//! {"kind":"node","id":"libfoo","type":"run","state":"unresolved","pkg":{"name":"libfoo"}}
//! {"kind":"node","id":"bar","type":"build","state":"build","srpm_path":"SRPMS/bar-1.0.src.rpm","pkg":{"name":"bar"}}
//! {"kind":"edge","from":"bar","to":"libfoo"}
//! ```
//!
//! Every malformed line is fatal. A skipped edge would change the counts of
//! every report built on the graph.

use crate::error::{Error, Result};
use crate::graph::PkgGraph;
use crate::node::PkgNode;
use serde::Deserialize;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// One line of a graph description.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record {
    Node(PkgNode),
    Edge { from: String, to: String },
}

/// Reject nodes the analytics engine cannot name.
fn validate_node(node: &PkgNode, line: usize) -> Result<()> {
    if node.id.trim().is_empty() {
        return Err(Error::InvalidFormat(format!("line {line}: node has an empty id")));
    }
    if node.versioned_pkg.name.trim().is_empty() {
        return Err(Error::InvalidFormat(format!(
            "line {line}: node '{}' has an empty package name",
            node.id
        )));
    }
    Ok(())
}

/// Read a graph description from any async reader.
///
/// Blank lines are ignored. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns an error on I/O failure, on a line that is not a valid record,
/// on a node without an id or package name, on a duplicate node id, on an
/// edge naming a node not declared on an earlier line, and on a node
/// depending on itself.
pub async fn read_graph<R: AsyncRead + Unpin>(reader: R) -> Result<PkgGraph> {
    let mut graph = PkgGraph::new();
    let mut lines = BufReader::new(reader).lines();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record: Record = serde_json::from_str(trimmed).map_err(|source| Error::Json {
            line: line_number,
            source,
        })?;

        match record {
            Record::Node(node) => {
                validate_node(&node, line_number)?;
                graph
                    .add_node(node)
                    .map_err(|e| e.at_line(line_number))?;
            }
            Record::Edge { from, to } => {
                graph
                    .add_edge(&from, &to)
                    .map_err(|e| e.at_line(line_number))?;
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        lines = line_number,
        "Loaded package graph"
    );

    if !graph.is_acyclic() {
        tracing::warn!("Package graph contains a dependency cycle");
    }

    Ok(graph)
}

/// Read a graph description from a file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, plus every error
/// [`read_graph`] can return.
pub async fn read_graph_file(path: impl AsRef<Path>) -> Result<PkgGraph> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading package graph");

    let file = File::open(path).await?;
    read_graph(file).await
}
