//! Fat-POM dependency appending.
//!
//! When an artifact bundles sibling subprojects, their own runtime
//! dependencies must still be declared in the published POM. The appender
//! owns the target POM tree, guarantees a single `<dependencies>` block,
//! and adds each qualifying dependency exactly once.

use std::collections::HashSet;

use fatpom_core::{Coordinate, ResolvedDependency, SubprojectDeps};

use crate::document::XmlElement;
use crate::error::{PomError, Result};

const DEPENDENCIES_TAG: &str = "dependencies";
const DEPENDENCY_TAG: &str = "dependency";
const KEY_GROUP_ID: &str = "groupId";
const KEY_ARTIFACT_ID: &str = "artifactId";

#[derive(Debug)]
pub struct DependencyAppender {
    root: XmlElement,
    embedded: HashSet<Coordinate>,
    existing: HashSet<Coordinate>,
}

impl DependencyAppender {
    /// Takes ownership of the target POM root and the embedded coordinate
    /// set. Locates the `<dependencies>` element, creating it when absent,
    /// and indexes the `(group, artifact)` pair of every dependency
    /// already declared.
    pub fn new(mut root: XmlElement, embedded: HashSet<Coordinate>) -> Result<Self> {
        if root.child(DEPENDENCIES_TAG).is_none() {
            root.append_child(XmlElement::new(DEPENDENCIES_TAG));
        }

        let mut existing = HashSet::new();
        if let Some(dependencies) = root.child(DEPENDENCIES_TAG) {
            for node in dependencies.children_named(DEPENDENCY_TAG) {
                existing.insert(node_coordinate(node)?);
            }
        }

        Ok(Self {
            root,
            embedded,
            existing,
        })
    }

    /// Attempts to add every dependency in the subproject's runtime set,
    /// in declaration order.
    pub fn add_subproject_dependencies(&mut self, subproject: &SubprojectDeps) -> Result<()> {
        for dependency in &subproject.runtime {
            self.try_add(dependency)?;
        }
        Ok(())
    }

    /// Adds the dependency unless it is embedded, self-resolving, or
    /// already declared. Skipping is silent normal-path behavior.
    pub fn try_add(&mut self, dependency: &ResolvedDependency) -> Result<()> {
        if self.should_add(dependency) {
            self.append(dependency)?;
        }
        Ok(())
    }

    /// Recovers the mutated POM tree; serialization is the caller's job.
    pub fn into_document(self) -> XmlElement {
        self.root
    }

    fn should_add(&self, dependency: &ResolvedDependency) -> bool {
        let coordinate = dependency.coordinate();
        if let Some(coordinate) = &coordinate
            && self.embedded.contains(coordinate)
        {
            return false;
        }
        if dependency.is_self_resolving() && !dependency.is_project() {
            return false;
        }
        match coordinate {
            Some(coordinate) => !self.existing.contains(&coordinate),
            // No group coordinate: append below reports the defect
            None => true,
        }
    }

    fn append(&mut self, dependency: &ResolvedDependency) -> Result<()> {
        let group = dependency
            .group
            .as_deref()
            .ok_or_else(|| PomError::MissingCoordinate {
                name: dependency.name.clone(),
                field: "group",
            })?;
        let version = dependency
            .version
            .as_deref()
            .ok_or_else(|| PomError::MissingCoordinate {
                name: dependency.name.clone(),
                field: "version",
            })?;

        let mut node = XmlElement::new(DEPENDENCY_TAG);
        node.append_child(XmlElement::with_text(KEY_GROUP_ID, group));
        node.append_child(XmlElement::with_text(KEY_ARTIFACT_ID, &dependency.name));
        node.append_child(XmlElement::with_text("version", version));
        node.append_child(XmlElement::with_text("scope", "runtime"));

        let dependencies = self
            .root
            .child_mut(DEPENDENCIES_TAG)
            .ok_or(PomError::MissingElement {
                element: "dependencies",
            })?;
        dependencies.append_child(node);
        self.existing
            .insert(Coordinate::new(group, &dependency.name));
        Ok(())
    }
}

fn node_coordinate(node: &XmlElement) -> Result<Coordinate> {
    let group = node.child(KEY_GROUP_ID).ok_or(PomError::MissingElement {
        element: "groupId",
    })?;
    let artifact = node
        .child(KEY_ARTIFACT_ID)
        .ok_or(PomError::MissingElement {
            element: "artifactId",
        })?;
    Ok(Coordinate::new(group.text(), artifact.text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_pom() -> XmlElement {
        XmlElement::parse("<project><modelVersion>4.0.0</modelVersion></project>").unwrap()
    }

    fn declared(document: &XmlElement) -> Vec<(String, String, String)> {
        document
            .child("dependencies")
            .map(|dependencies| {
                dependencies
                    .children_named("dependency")
                    .map(|node| {
                        (
                            node.child("groupId").unwrap().text().to_string(),
                            node.child("artifactId").unwrap().text().to_string(),
                            node.child("scope").map_or(String::new(), |scope| {
                                scope.text().to_string()
                            }),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_creates_dependencies_block_and_appends_in_order() {
        let mut appender = DependencyAppender::new(empty_pom(), HashSet::new()).unwrap();
        let subproject = SubprojectDeps {
            name: "plugin".into(),
            runtime: vec![
                ResolvedDependency::external("com.acme", "foo", "1.0"),
                ResolvedDependency::external("com.acme", "bar", "2.0"),
            ],
            implementation: Vec::new(),
        };

        appender.add_subproject_dependencies(&subproject).unwrap();
        let document = appender.into_document();

        let entries = declared(&document);
        assert_eq!(
            entries,
            vec![
                ("com.acme".into(), "foo".into(), "runtime".into()),
                ("com.acme".into(), "bar".into(), "runtime".into()),
            ]
        );
    }

    #[test]
    fn test_existing_declaration_not_duplicated() {
        let pom = XmlElement::parse(
            r"<project>
  <dependencies>
    <dependency>
      <groupId>com.acme</groupId>
      <artifactId>foo</artifactId>
      <version>1.0</version>
    </dependency>
  </dependencies>
</project>",
        )
        .unwrap();

        let mut appender = DependencyAppender::new(pom, HashSet::new()).unwrap();
        appender
            .try_add(&ResolvedDependency::external("com.acme", "foo", "1.0"))
            .unwrap();
        appender
            .try_add(&ResolvedDependency::external("com.acme", "bar", "2.0"))
            .unwrap();

        let entries = declared(&appender.into_document());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, "foo");
        assert_eq!(entries[1].1, "bar");
    }

    #[test]
    fn test_embedded_dependency_skipped() {
        let embedded: HashSet<_> = [Coordinate::new("com.acme", "foo")].into();
        let mut appender = DependencyAppender::new(empty_pom(), embedded).unwrap();

        appender
            .try_add(&ResolvedDependency::external("com.acme", "foo", "1.0"))
            .unwrap();
        appender
            .try_add(&ResolvedDependency::external("com.acme", "bar", "2.0"))
            .unwrap();

        let entries = declared(&appender.into_document());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, "bar");
    }

    #[test]
    fn test_self_resolving_dependency_skipped() {
        let mut appender = DependencyAppender::new(empty_pom(), HashSet::new()).unwrap();
        appender
            .try_add(&ResolvedDependency::files("local-jars"))
            .unwrap();

        assert!(declared(&appender.into_document()).is_empty());
    }

    #[test]
    fn test_dedup_by_coordinate_ignores_version() {
        let mut appender = DependencyAppender::new(empty_pom(), HashSet::new()).unwrap();
        appender
            .try_add(&ResolvedDependency::external("com.acme", "foo", "1.0"))
            .unwrap();
        appender
            .try_add(&ResolvedDependency::external("com.acme", "foo", "2.0"))
            .unwrap();

        let document = appender.into_document();
        let entries = declared(&document);
        assert_eq!(entries.len(), 1);
        let node = document
            .child("dependencies")
            .unwrap()
            .child("dependency")
            .unwrap();
        assert_eq!(node.child("version").unwrap().text(), "1.0");
    }

    #[test]
    fn test_repeated_pass_is_idempotent() {
        let subproject = SubprojectDeps {
            name: "plugin".into(),
            runtime: vec![
                ResolvedDependency::external("com.acme", "foo", "1.0"),
                ResolvedDependency::external("com.acme", "bar", "2.0"),
            ],
            implementation: Vec::new(),
        };

        let mut appender = DependencyAppender::new(empty_pom(), HashSet::new()).unwrap();
        appender.add_subproject_dependencies(&subproject).unwrap();
        appender.add_subproject_dependencies(&subproject).unwrap();

        assert_eq!(declared(&appender.into_document()).len(), 2);
    }

    #[test]
    fn test_dedup_spans_subprojects_in_same_pass() {
        let first = SubprojectDeps {
            name: "a".into(),
            runtime: vec![ResolvedDependency::external("com.acme", "shared", "1.0")],
            implementation: Vec::new(),
        };
        let second = SubprojectDeps {
            name: "b".into(),
            runtime: vec![ResolvedDependency::external("com.acme", "shared", "1.1")],
            implementation: Vec::new(),
        };

        let mut appender = DependencyAppender::new(empty_pom(), HashSet::new()).unwrap();
        appender.add_subproject_dependencies(&first).unwrap();
        appender.add_subproject_dependencies(&second).unwrap();

        assert_eq!(declared(&appender.into_document()).len(), 1);
    }

    #[test]
    fn test_missing_group_is_fatal() {
        let mut appender = DependencyAppender::new(empty_pom(), HashSet::new()).unwrap();
        let dependency = ResolvedDependency {
            group: None,
            name: "orphan".into(),
            version: Some("1.0".into()),
            kind: fatpom_core::DependencyKind::External,
        };

        let err = appender.try_add(&dependency).unwrap_err();
        assert!(matches!(
            err,
            PomError::MissingCoordinate { field: "group", .. }
        ));
    }

    #[test]
    fn test_malformed_existing_dependency_is_fatal() {
        let pom = XmlElement::parse(
            r"<project>
  <dependencies>
    <dependency>
      <artifactId>orphan</artifactId>
    </dependency>
  </dependencies>
</project>",
        )
        .unwrap();

        let err = DependencyAppender::new(pom, HashSet::new()).unwrap_err();
        assert!(matches!(
            err,
            PomError::MissingElement { element: "groupId" }
        ));
    }

    #[test]
    fn test_project_dependency_added() {
        let mut appender = DependencyAppender::new(empty_pom(), HashSet::new()).unwrap();
        appender
            .try_add(&ResolvedDependency::project("com.acme", "sibling", "1.0"))
            .unwrap();

        let entries = declared(&appender.into_document());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, "sibling");
    }
}
