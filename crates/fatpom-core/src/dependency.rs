//! Resolved build-dependency model.
//!
//! Mirrors what a build tool's dependency resolution hands to the
//! publishing pass: every dependency carries a name, optional group and
//! version coordinates, and a tag telling project-to-project dependencies
//! apart from registry artifacts and local file collections.

use std::fmt;

/// How a dependency is resolved by the surrounding build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// Dependency on a sibling project of the same build.
    Project,
    /// Dependency on a published registry artifact.
    External,
    /// Self-resolving local file collection; has no publishable coordinates.
    Files,
}

/// A single dependency as seen by the publishing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub group: Option<String>,
    pub name: String,
    pub version: Option<String>,
    pub kind: DependencyKind,
}

impl ResolvedDependency {
    pub fn external(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            name: name.into(),
            version: Some(version.into()),
            kind: DependencyKind::External,
        }
    }

    pub fn project(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            name: name.into(),
            version: Some(version.into()),
            kind: DependencyKind::Project,
        }
    }

    /// A local file-collection dependency, identified by display name only.
    pub fn files(name: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into(),
            version: None,
            kind: DependencyKind::Files,
        }
    }

    pub fn is_project(&self) -> bool {
        self.kind == DependencyKind::Project
    }

    /// True for dependencies resolved to concrete files without coordinates.
    pub fn is_self_resolving(&self) -> bool {
        self.kind == DependencyKind::Files
    }

    /// The `(group, artifact)` identity pair, when a group is present.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.group
            .as_deref()
            .map(|group| Coordinate::new(group, &self.name))
    }
}

/// `(group, artifact)` pair used as dependency identity.
///
/// Version is intentionally not part of identity: two artifacts sharing a
/// coordinate are the same declaration for deduplication purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// A subproject's declared dependency sets, as enumerated by the build.
#[derive(Debug, Clone, Default)]
pub struct SubprojectDeps {
    pub name: String,
    /// Runtime dependency set, in declaration order.
    pub runtime: Vec<ResolvedDependency>,
    /// Implementation dependency set, in declaration order.
    pub implementation: Vec<ResolvedDependency>,
}

impl SubprojectDeps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime: Vec::new(),
            implementation: Vec::new(),
        }
    }
}
