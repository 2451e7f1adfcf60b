//! Domain types for Maven POM dependencies.

use fatpom_core::Coordinate;

/// Dependency scope as declared in a published POM.
///
/// Only the `runtime` literal maps to [`PomScope::Runtime`]; every other
/// value, including an absent scope, is treated as compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PomScope {
    #[default]
    Compile,
    Runtime,
}

impl std::str::FromStr for PomScope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "runtime" => Self::Runtime,
            _ => Self::Compile,
        })
    }
}

impl PomScope {
    /// Build configuration this scope maps to on a consuming project.
    pub fn configuration_name(self) -> &'static str {
        match self {
            Self::Runtime => "implementation",
            Self::Compile => "api",
        }
    }
}

/// A single `<dependency>` entry extracted from a POM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: PomScope,
}

impl PomDependency {
    /// `group:artifact:version` notation for declaring the dependency.
    pub fn notation(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// The `(group, artifact)` identity pair.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id)
    }
}
