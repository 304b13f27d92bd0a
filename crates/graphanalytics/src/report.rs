//! Report definitions and line rendering.
//!
//! The engine hands back structured [`Report`]s; turning them into output is
//! left to the caller. [`Report::lines`] gives the two-level text form: a
//! summary line per ranked entry, followed by one detail line per value.

use crate::aggregate::Aggregation;
use crate::rank::{RankedPair, SortOrder, rank};
use crate::strategy;
use pkggraph::PkgGraph;
use serde::Serialize;
use std::fmt;

/// Horizontal rule framing report titles.
const BANNER_RULE: &str = "================================================";

/// The four blocking reports, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Unresolved packages by number of direct dependents
    DirectUnresolved,
    /// SRPMs by number of directly unmet requirements
    DirectClosestToUnblocked,
    /// Unresolved packages by number of transitive dependents
    IndirectUnresolved,
    /// SRPMs by number of transitively unmet requirements
    IndirectClosestToUnblocked,
}

impl ReportKind {
    /// Every report, in the order reports are emitted.
    pub const ALL: [Self; 4] = [
        Self::DirectUnresolved,
        Self::DirectClosestToUnblocked,
        Self::IndirectUnresolved,
        Self::IndirectClosestToUnblocked,
    ];

    /// Fixed report title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::DirectUnresolved => "[DIRECT] Most common unresolved dependencies",
            Self::DirectClosestToUnblocked => "[DIRECT] SRPMs closest to being ready to build",
            Self::IndirectUnresolved => "[INDIRECT] Most common unresolved dependencies",
            Self::IndirectClosestToUnblocked => "[INDIRECT] SRPMs closest to being ready to build",
        }
    }

    /// What the per-entry count measures.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::DirectUnresolved => "direct dependents",
            Self::DirectClosestToUnblocked => "unmet dependencies",
            Self::IndirectUnresolved => "total dependents",
            Self::IndirectClosestToUnblocked => "total unmet dependencies",
        }
    }

    /// Count sort direction for this report.
    #[must_use]
    pub fn sort_order(self) -> SortOrder {
        match self {
            Self::DirectUnresolved | Self::IndirectUnresolved => SortOrder::MostFirst,
            Self::DirectClosestToUnblocked | Self::IndirectClosestToUnblocked => {
                SortOrder::FewestFirst
            }
        }
    }

    /// Run this report's traversal strategy over the graph.
    #[must_use]
    pub fn aggregate(self, graph: &PkgGraph) -> Aggregation {
        match self {
            Self::DirectUnresolved => strategy::direct_unresolved(graph),
            Self::DirectClosestToUnblocked => strategy::direct_closest_to_unblocked(graph),
            Self::IndirectUnresolved => strategy::indirect_unresolved(graph),
            Self::IndirectClosestToUnblocked => strategy::indirect_closest_to_unblocked(graph),
        }
    }

    /// Aggregate and rank this report, keeping at most `max_results` entries.
    #[must_use]
    pub fn generate(self, graph: &PkgGraph, max_results: usize) -> Report {
        let aggregation = self.aggregate(graph);
        tracing::debug!(report = ?self, keys = aggregation.len(), "Aggregated report");

        Report {
            kind: self,
            entries: rank(aggregation, self.sort_order(), max_results),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One ranked report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Which report this is
    pub kind: ReportKind,
    /// Ranked entries, already truncated
    pub entries: Vec<RankedPair>,
}

/// A rendered line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// Title framing
    Banner(String),
    /// `{rank}: {key} - {count} {description}`
    Summary(String),
    /// One value of the preceding summary entry
    Detail(String),
}

impl ReportLine {
    /// Text of the line.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Banner(text) | Self::Summary(text) | Self::Detail(text) => text,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl Report {
    /// Title banner lines.
    #[must_use]
    pub fn banner(&self) -> [ReportLine; 3] {
        [
            ReportLine::Banner(BANNER_RULE.to_string()),
            ReportLine::Banner(self.kind.title().to_string()),
            ReportLine::Banner(BANNER_RULE.to_string()),
        ]
    }

    /// Summary and detail lines for every entry, in rank order.
    pub fn lines(&self) -> impl Iterator<Item = ReportLine> + '_ {
        let description = self.kind.description();

        self.entries.iter().enumerate().flat_map(move |(i, pair)| {
            let summary = ReportLine::Summary(format!(
                "{}: {} - {} {}",
                i + 1,
                pair.key,
                pair.count(),
                description
            ));
            let details = pair
                .values
                .iter()
                .map(|value| ReportLine::Detail(format!("--> {value}")));

            std::iter::once(summary).chain(details)
        })
    }
}
