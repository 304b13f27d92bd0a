//! Dependency-unit naming.
//!
//! Run, build and meta nodes produced by the same source package are one
//! build unit. Reports name a node by its SRPM file name so that unit shows
//! up once instead of once per node type.

use pkggraph::{NO_SRPM_PATH, PkgNode};
use std::path::Path;

/// Final path component of the node's SRPM path.
///
/// Returns an empty string when the path has no file name component.
#[must_use]
pub fn srpm_base_name(node: &PkgNode) -> &str {
    Path::new(&node.srpm_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
}

/// Name representing the node's build unit across reports.
///
/// Prefers the SRPM file name and falls back to the package name when the
/// node has no source package.
#[must_use]
pub fn dependency_unit_name(node: &PkgNode) -> &str {
    let name = srpm_base_name(node);
    if name.is_empty() || name == NO_SRPM_PATH {
        &node.versioned_pkg.name
    } else {
        name
    }
}
