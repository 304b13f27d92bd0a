//! Ranked blocking analysis of package build-plan dependency graphs.
//!
//! Given a [`PkgGraph`](pkggraph::PkgGraph), the engine answers two
//! questions, each at one hop and transitively:
//!
//! - Which unresolved dependencies block the most packages?
//! - Which source packages are closest to being buildable?
//!
//! ## Usage
//!
//! ```no_run
//! use graphanalytics::{AnalysisConfig, analyze_file};
//!
//! # async fn example() -> graphanalytics::Result<()> {
//! let analysis = analyze_file("graph.jsonl", &AnalysisConfig::default()).await?;
//! for report in &analysis.reports {
//!     println!("{}", report.kind.title());
//!     for line in report.lines() {
//!         println!("{line}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
pub mod analysis;
pub mod config;
pub mod error;
pub mod identity;
pub mod rank;
pub mod report;
pub mod strategy;

pub use aggregate::Aggregation;
pub use analysis::{Analysis, analyze, analyze_file};
pub use config::{AnalysisConfig, DEFAULT_MAX_RESULTS};
pub use error::{Error, Result};
pub use identity::{dependency_unit_name, srpm_base_name};
pub use rank::{RankedPair, SortOrder, rank};
pub use report::{Report, ReportKind, ReportLine};
