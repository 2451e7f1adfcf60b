//! POM dependency extraction.
//!
//! Reads a published POM and materializes every `<dependency>` element it
//! declares, wherever the element sits in the tree. The surrounding
//! publishing pass feeds the result into the consuming project's own
//! dependency declarations.

use std::path::Path;

use crate::document::XmlElement;
use crate::error::{PomError, Result};
use crate::types::{PomDependency, PomScope};

/// Reads a POM file from disk and extracts its declared dependencies.
pub fn read_pom_file(path: &Path) -> Result<Vec<PomDependency>> {
    tracing::debug!("Reading POM dependencies from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_pom(&content)
}

/// Parses POM text and extracts its declared dependencies.
pub fn parse_pom(content: &str) -> Result<Vec<PomDependency>> {
    let document = XmlElement::parse(content)?;
    read_dependencies(&document)
}

/// Extracts every `<dependency>` element from a parsed POM document.
///
/// Elements are matched by tag name anywhere in the tree, not just under
/// a top-level `<dependencies>` block, and returned in document order.
/// A document without any yields an empty vec.
pub fn read_dependencies(document: &XmlElement) -> Result<Vec<PomDependency>> {
    let mut dependencies = Vec::new();
    collect_dependencies(document, &mut dependencies)?;
    Ok(dependencies)
}

fn collect_dependencies(element: &XmlElement, out: &mut Vec<PomDependency>) -> Result<()> {
    for child in element.children() {
        if child.name() == "dependency" {
            out.push(parse_dependency(child)?);
        } else {
            collect_dependencies(child, out)?;
        }
    }
    Ok(())
}

fn parse_dependency(item: &XmlElement) -> Result<PomDependency> {
    let group_id = child_text(item, "groupId")?;
    let artifact_id = child_text(item, "artifactId")?;
    let version = child_text(item, "version")?;
    let scope = item
        .child("scope")
        .map_or(PomScope::Compile, |element| {
            element.text().parse().unwrap_or_default()
        });

    Ok(PomDependency {
        group_id,
        artifact_id,
        version,
        scope,
    })
}

fn child_text(item: &XmlElement, name: &'static str) -> Result<String> {
    item.child(name)
        .map(|element| element.text().to_string())
        .ok_or(PomError::MissingElement { element: name })
}
