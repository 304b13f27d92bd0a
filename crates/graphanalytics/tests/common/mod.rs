//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Build plan with one missing library, two SRPMs and a goal.
///
/// ```text
/// all(goal) -> x-build (x-1.src.rpm) -> libfoo (unresolved)
///                                    -> z-run (z-1.src.rpm, build) -> z-build -> libbar (unresolved)
///           -> y-build (y-1.src.rpm) -> libfoo
///                                    -> y-devel (y-1.src.rpm, build)
///                                    -> glibc (glibc-2.38.src.rpm, uptodate)
/// ```
pub const BUILD_PLAN: &str = r#"{"kind":"node","id":"libfoo","type":"run","state":"unresolved","pkg":{"name":"libfoo"}}
{"kind":"node","id":"libbar","type":"run","state":"unresolved","pkg":{"name":"libbar"}}
{"kind":"node","id":"x-build","type":"build","state":"build","srpm_path":"/SRPMS/x-1.src.rpm","pkg":{"name":"x","version":"1"}}
{"kind":"node","id":"y-build","type":"build","state":"build","srpm_path":"/SRPMS/y-1.src.rpm","pkg":{"name":"y","version":"1"}}
{"kind":"node","id":"y-devel","type":"run","state":"build","srpm_path":"/SRPMS/y-1.src.rpm","pkg":{"name":"y-devel"}}
{"kind":"node","id":"z-run","type":"run","state":"build","srpm_path":"/SRPMS/z-1.src.rpm","pkg":{"name":"z"}}
{"kind":"node","id":"z-build","type":"build","state":"build","srpm_path":"/SRPMS/z-1.src.rpm","pkg":{"name":"z"}}
{"kind":"node","id":"glibc","type":"run","state":"uptodate","srpm_path":"/SRPMS/glibc-2.38.src.rpm","pkg":{"name":"glibc"}}
{"kind":"node","id":"all","type":"goal","state":"meta","pkg":{"name":"ALL"}}
{"kind":"edge","from":"x-build","to":"libfoo"}
{"kind":"edge","from":"x-build","to":"z-run"}
{"kind":"edge","from":"z-run","to":"z-build"}
{"kind":"edge","from":"z-build","to":"libbar"}
{"kind":"edge","from":"y-build","to":"libfoo"}
{"kind":"edge","from":"y-build","to":"y-devel"}
{"kind":"edge","from":"y-build","to":"glibc"}
{"kind":"edge","from":"all","to":"x-build"}
{"kind":"edge","from":"all","to":"y-build"}
"#;

/// Write `contents` as a graph file inside `dir`.
pub fn write_graph(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("graph.jsonl");
    fs::write(&path, contents).expect("failed to write graph file");
    path
}

/// Run the graphanalytics binary with the given arguments.
pub fn run_graphanalytics(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graphanalytics"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute graphanalytics binary")
}

/// Path as a `&str` for command arguments.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}
