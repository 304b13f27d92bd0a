//! Analysis driver: runs all four reports over one graph.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         analyze_file                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Load (async):      read_graph_file -> PkgGraph              │
//! │  Analyze (rayon):   4 strategies, one private map each       │
//! │  Rank (per report): sort by count, tie-break by key, limit   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The strategies only read the graph, so they run in parallel with a
//! single join before the reports are assembled in output order.

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::report::{Report, ReportKind};
use pkggraph::PkgGraph;
use serde::Serialize;
use std::path::Path;

/// The four ranked reports of one analysis pass, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Reports ordered as [`ReportKind::ALL`]
    pub reports: Vec<Report>,
}

impl Analysis {
    /// Find the report of the given kind.
    #[must_use]
    pub fn report(&self, kind: ReportKind) -> Option<&Report> {
        self.reports.iter().find(|r| r.kind == kind)
    }
}

/// Run every report over `graph`.
#[must_use]
pub fn analyze(graph: &PkgGraph, config: &AnalysisConfig) -> Analysis {
    let max_results = config.max_results;
    let generate = |kind: ReportKind| kind.generate(graph, max_results);

    let ((direct_unresolved, direct_closest), (indirect_unresolved, indirect_closest)) =
        rayon::join(
            || {
                rayon::join(
                    || generate(ReportKind::DirectUnresolved),
                    || generate(ReportKind::DirectClosestToUnblocked),
                )
            },
            || {
                rayon::join(
                    || generate(ReportKind::IndirectUnresolved),
                    || generate(ReportKind::IndirectClosestToUnblocked),
                )
            },
        );

    Analysis {
        reports: vec![
            direct_unresolved,
            direct_closest,
            indirect_unresolved,
            indirect_closest,
        ],
    }
}

/// Load the graph at `path` and run every report over it.
///
/// # Errors
///
/// Returns [`Error::GraphUnavailable`] if the graph cannot be loaded. No
/// report is produced in that case.
pub async fn analyze_file(path: impl AsRef<Path>, config: &AnalysisConfig) -> Result<Analysis> {
    let path = path.as_ref();
    let graph = pkggraph::read_graph_file(path)
        .await
        .map_err(|source| Error::GraphUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Analyzing dependency graph"
    );

    Ok(analyze(&graph, config))
}
