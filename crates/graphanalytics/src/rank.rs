//! Ranking of aggregated results.

use crate::aggregate::Aggregation;
use serde::Serialize;
use std::cmp::Ordering;

/// Direction of the count sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Largest value count first (most blocking)
    MostFirst,
    /// Smallest value count first (closest to unblocked)
    FewestFirst,
}

/// A key together with the distinct values recorded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPair {
    /// Package or SRPM name the entry is about
    pub key: String,
    /// Related dependency units, in the order they were found
    pub values: Vec<String>,
}

impl RankedPair {
    /// Number of related dependency units.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// Sort an aggregation into ranked pairs and keep the first `max_results`.
///
/// Entries are ordered by value count in the given direction. Equal counts
/// are ordered by key, ascending, regardless of direction. A `max_results`
/// of 0 keeps every entry.
#[must_use]
pub fn rank(aggregation: Aggregation, order: SortOrder, max_results: usize) -> Vec<RankedPair> {
    let mut pairs: Vec<RankedPair> = aggregation
        .into_iter()
        .map(|(key, values)| RankedPair { key, values })
        .collect();

    pairs.sort_by(|a, b| compare(a, b, order));

    if max_results != 0 {
        pairs.truncate(max_results);
    }

    pairs
}

fn compare(a: &RankedPair, b: &RankedPair, order: SortOrder) -> Ordering {
    let by_count = match order {
        SortOrder::MostFirst => b.count().cmp(&a.count()),
        SortOrder::FewestFirst => a.count().cmp(&b.count()),
    };

    by_count.then_with(|| a.key.cmp(&b.key))
}
