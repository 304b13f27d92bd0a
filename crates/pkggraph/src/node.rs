//! Node types for the package dependency graph.
//!
//! A node is a single requirement in a build plan: a run-time require, a
//! build-time require, a meta grouping, or a synthetic goal. Every node
//! carries its resolution state and, when known, the source package (SRPM)
//! that would produce it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel stored in `srpm_path` for nodes without an associated source package.
pub const NO_SRPM_PATH: &str = "<NO_SRPM_PATH>";

/// Kind of requirement a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Grouping node with no package of its own
    Meta,
    /// Run-time requirement (package must be installable)
    Run,
    /// Build-time requirement (package must be built)
    Build,
    /// Synthetic top-level target
    Goal,
    /// Requirement satisfied from a remote repository
    Remote,
    /// Requirement satisfied by an already built package
    #[serde(rename = "prebuilt", alias = "pre_built")]
    PreBuilt,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meta => write!(f, "meta"),
            Self::Run => write!(f, "run"),
            Self::Build => write!(f, "build"),
            Self::Goal => write!(f, "goal"),
            Self::Remote => write!(f, "remote"),
            Self::PreBuilt => write!(f, "prebuilt"),
        }
    }
}

/// Resolution state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// No package currently satisfies the requirement
    Unresolved,
    /// Satisfied by a package that still has to be built
    Build,
    /// Satisfied by a package that is already built
    #[serde(rename = "uptodate", alias = "up_to_date")]
    UpToDate,
    /// Satisfied by a cached package
    Cached,
    /// Meta node, never resolved on its own
    Meta,
}

impl NodeState {
    /// Returns `true` if the requirement is not yet concretely available.
    ///
    /// Both unresolved requirements and requirements that still need a build
    /// keep their dependents blocked.
    #[must_use]
    pub fn is_unavailable(self) -> bool {
        matches!(self, Self::Unresolved | Self::Build)
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved => write!(f, "unresolved"),
            Self::Build => write!(f, "build"),
            Self::UpToDate => write!(f, "uptodate"),
            Self::Cached => write!(f, "cached"),
            Self::Meta => write!(f, "meta"),
        }
    }
}

/// Package name with an optional version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionedPkg {
    /// Package name
    pub name: String,

    /// Version constraint or exact version, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl VersionedPkg {
    /// Create an unversioned package reference
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Attach a version to the package reference
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl fmt::Display for VersionedPkg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}-{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

fn default_srpm_path() -> String {
    NO_SRPM_PATH.to_string()
}

/// A single node in the package graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkgNode {
    /// Unique identifier used for edge lookups
    pub id: String,

    /// Kind of requirement
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Resolution state
    pub state: NodeState,

    /// Path to the producing source package, or [`NO_SRPM_PATH`]
    #[serde(default = "default_srpm_path")]
    pub srpm_path: String,

    /// Package this node stands for
    #[serde(rename = "pkg")]
    pub versioned_pkg: VersionedPkg,
}

impl PkgNode {
    /// Create a node without a source package.
    pub fn new(
        id: impl Into<String>,
        node_type: NodeType,
        state: NodeState,
        versioned_pkg: VersionedPkg,
    ) -> Self {
        Self {
            id: id.into(),
            node_type,
            state,
            srpm_path: default_srpm_path(),
            versioned_pkg,
        }
    }

    /// Set the source package path.
    #[must_use]
    pub fn with_srpm_path(mut self, srpm_path: impl Into<String>) -> Self {
        self.srpm_path = srpm_path.into();
        self
    }
}

impl fmt::Display for PkgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.versioned_pkg, self.node_type, self.state, self.id
        )
    }
}
