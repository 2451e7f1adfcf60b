//! Two-phase embedded-dependency planning.
//!
//! The configure phase collects every dependency that gets bundled into
//! the output artifact; finalizing produces an immutable [`EmbedPlan`]
//! that the POM transformation consumes. Once a plan exists, nothing can
//! be declared anymore.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::config::EmbedPolicy;
use crate::dependency::{Coordinate, ResolvedDependency, SubprojectDeps};

/// Configure-phase collector for dependencies embedded into an artifact.
#[derive(Debug, Default)]
pub struct EmbedSet {
    declared: Vec<ResolvedDependency>,
    projects: HashMap<String, SubprojectDeps>,
}

impl EmbedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a dependency as embedded into the output artifact.
    pub fn declare(&mut self, dependency: ResolvedDependency) {
        self.declared.push(dependency);
    }

    /// Registers an embedded project's declared dependency sets so its
    /// `implementation` dependencies can be propagated at finalize time.
    pub fn register_project(&mut self, project: SubprojectDeps) {
        self.projects.insert(project.name.clone(), project);
    }

    /// Consumes the collector and produces the finalized plan.
    pub fn finalize(self, policy: EmbedPolicy) -> EmbedPlan {
        let mut embedded = HashSet::new();
        let mut suppressed = BTreeSet::new();
        let mut roots = Vec::new();

        for dependency in &self.declared {
            if let Some(coordinate) = dependency.coordinate() {
                embedded.insert(coordinate);
            }
            if dependency.is_project() {
                tracing::debug!(
                    "Disabling publication for embedded project {}",
                    dependency.name
                );
                suppressed.insert(dependency.name.clone());
                roots.push(dependency.name.clone());
            }
        }

        let propagated = self.propagate(&roots, policy);

        EmbedPlan {
            embedded,
            propagated,
            suppressed,
        }
    }

    fn propagate(&self, roots: &[String], policy: EmbedPolicy) -> Vec<ResolvedDependency> {
        let mut propagated = Vec::new();
        let mut seen = HashSet::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: Vec<&str> = roots.iter().map(String::as_str).collect();

        while !queue.is_empty() {
            let mut next = Vec::new();
            for name in queue {
                if !visited.insert(name) {
                    continue;
                }
                let Some(project) = self.projects.get(name) else {
                    continue;
                };
                for dependency in &project.implementation {
                    if seen.insert(propagation_key(dependency)) {
                        propagated.push(dependency.clone());
                    }
                    if policy == EmbedPolicy::Transitive && dependency.is_project() {
                        next.push(dependency.name.as_str());
                    }
                }
            }
            queue = next;
        }

        propagated
    }
}

fn propagation_key(dependency: &ResolvedDependency) -> String {
    dependency
        .coordinate()
        .map_or_else(|| dependency.name.clone(), |coordinate| coordinate.to_string())
}

/// Finalized, immutable embedding plan for one output artifact.
#[derive(Debug, Clone)]
pub struct EmbedPlan {
    embedded: HashSet<Coordinate>,
    propagated: Vec<ResolvedDependency>,
    suppressed: BTreeSet<String>,
}

impl EmbedPlan {
    /// Coordinates of every dependency physically bundled into the artifact.
    pub fn embedded(&self) -> &HashSet<Coordinate> {
        &self.embedded
    }

    pub fn is_embedded(&self, coordinate: &Coordinate) -> bool {
        self.embedded.contains(coordinate)
    }

    /// Dependencies to declare on the consuming project's `implementation`
    /// configuration, in discovery order, each coordinate at most once.
    pub fn propagated(&self) -> &[ResolvedDependency] {
        &self.propagated
    }

    /// Names of embedded projects whose own publication is suppressed.
    pub fn suppressed_publications(&self) -> &BTreeSet<String> {
        &self.suppressed
    }
}
