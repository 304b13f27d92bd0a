//! Integration tests for the analysis pipeline through the public API:
//! graph file -> four ranked reports.

use graphanalytics::{AnalysisConfig, Error, RankedPair, ReportKind, ReportLine, analyze_file};

mod common;
use common::{BUILD_PLAN, write_graph};

fn summary(entries: &[RankedPair]) -> Vec<(&str, usize)> {
    entries.iter().map(|e| (e.key.as_str(), e.count())).collect()
}

fn sorted_values(entry: &RankedPair) -> Vec<&str> {
    let mut values: Vec<&str> = entry.values.iter().map(String::as_str).collect();
    values.sort_unstable();
    values
}

#[tokio::test]
async fn build_plan_reports() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_graph(&dir, BUILD_PLAN);

    let analysis = analyze_file(&path, &AnalysisConfig::new(0)).await.unwrap();

    let direct_unresolved = analysis.report(ReportKind::DirectUnresolved).unwrap();
    assert_eq!(
        summary(&direct_unresolved.entries),
        vec![("libfoo", 2), ("libbar", 1)]
    );
    assert_eq!(
        sorted_values(&direct_unresolved.entries[0]),
        vec!["x-1.src.rpm", "y-1.src.rpm"]
    );

    let direct_closest = analysis
        .report(ReportKind::DirectClosestToUnblocked)
        .unwrap();
    assert_eq!(
        summary(&direct_closest.entries),
        vec![("y-1.src.rpm", 1), ("z-1.src.rpm", 1), ("x-1.src.rpm", 2)]
    );

    let indirect_unresolved = analysis.report(ReportKind::IndirectUnresolved).unwrap();
    assert_eq!(
        summary(&indirect_unresolved.entries),
        vec![("libbar", 2), ("libfoo", 2)]
    );

    let indirect_closest = analysis
        .report(ReportKind::IndirectClosestToUnblocked)
        .unwrap();
    assert_eq!(
        summary(&indirect_closest.entries),
        vec![("y-1.src.rpm", 1), ("z-1.src.rpm", 1), ("x-1.src.rpm", 3)]
    );
    assert_eq!(
        sorted_values(&indirect_closest.entries[2]),
        vec!["libbar", "libfoo", "z-1.src.rpm"]
    );
}

#[tokio::test]
async fn goal_and_own_srpm_never_reported() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_graph(&dir, BUILD_PLAN);

    let analysis = analyze_file(&path, &AnalysisConfig::new(0)).await.unwrap();

    for report in &analysis.reports {
        for entry in &report.entries {
            assert!(!entry.values.iter().any(|v| v == "ALL"));
            assert!(!entry.values.contains(&entry.key));
        }
    }
}

#[tokio::test]
async fn default_limit_and_rendering() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_graph(&dir, BUILD_PLAN);

    let analysis = analyze_file(&path, &AnalysisConfig::new(1)).await.unwrap();

    let report = analysis.report(ReportKind::DirectUnresolved).unwrap();
    let lines: Vec<ReportLine> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text(), "1: libfoo - 2 direct dependents");
    assert!(matches!(lines[1], ReportLine::Detail(_)));
}

#[tokio::test]
async fn missing_graph_is_fatal() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let err = analyze_file(dir.path().join("absent.jsonl"), &AnalysisConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::GraphUnavailable { .. }));
}

#[tokio::test]
async fn malformed_graph_is_fatal() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_graph(&dir, "{\"kind\":\"edge\",\"from\":\"a\",\"to\":\"b\"}\n");

    let err = analyze_file(&path, &AnalysisConfig::default())
        .await
        .unwrap_err();

    let Error::GraphUnavailable { source, .. } = err;
    assert!(matches!(source, pkggraph::Error::UnknownNode { line: 1, .. }));
}
