//! Analysis configuration.

/// Number of entries kept per report unless configured otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Settings applied uniformly to all four reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Entries kept per report; 0 keeps every entry
    pub max_results: usize,
}

impl AnalysisConfig {
    /// Create a configuration with the given result limit.
    #[must_use]
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}
