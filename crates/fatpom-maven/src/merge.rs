//! Mapping of embedded-POM dependencies onto consuming configurations.
//!
//! When an external dependency is embedded, the dependencies its POM
//! declares still have to reach the consuming project. Runtime-scoped
//! entries land on `implementation`, everything else on `api`.

use crate::types::PomDependency;

/// A dependency declaration to add to the consuming project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationAddition {
    pub configuration: &'static str,
    pub notation: String,
}

/// Maps reader output to configuration additions, preserving order.
pub fn configuration_additions(dependencies: &[PomDependency]) -> Vec<ConfigurationAddition> {
    dependencies
        .iter()
        .map(|dependency| ConfigurationAddition {
            configuration: dependency.scope.configuration_name(),
            notation: dependency.notation(),
        })
        .collect()
}
