//! POM project-metadata assembly.
//!
//! Renders the publisher configuration into the identity and description
//! blocks of a POM: coordinates, name, URLs, license, developers, scm and
//! issue management. Validation failures abort before the tree is touched.

use fatpom_core::{PublisherConfig, Result};

use crate::document::XmlElement;

const LICENSE_NAME: &str = "MIT License";
const LICENSE_URL: &str = "https://opensource.org/licenses/MIT";

/// Applies publication metadata to a POM root.
///
/// Coordinates (`groupId`, `version`) and single-valued fields replace
/// any existing value; the license, developers, scm and issueManagement
/// blocks are appended fresh.
pub fn apply_project_metadata(root: &mut XmlElement, config: &PublisherConfig) -> Result<()> {
    config.validate()?;

    root.set_child_text("groupId", &config.group);
    root.set_child_text("version", &config.version);
    root.set_child_text("name", &config.display_name);
    root.set_child_text("description", &config.description);
    root.set_child_text("url", &config.url);

    let mut license = XmlElement::new("license");
    license.append_child(XmlElement::with_text("name", LICENSE_NAME));
    license.append_child(XmlElement::with_text("url", LICENSE_URL));
    let mut licenses = XmlElement::new("licenses");
    licenses.append_child(license);
    root.append_child(licenses);

    let mut developers = XmlElement::new("developers");
    for developer in &config.developers {
        let mut node = XmlElement::new("developer");
        node.append_child(XmlElement::with_text("id", &developer.id));
        node.append_child(XmlElement::with_text("name", &developer.name));
        node.append_child(XmlElement::with_text("email", &developer.email));
        developers.append_child(node);
    }
    root.append_child(developers);

    let mut scm = XmlElement::new("scm");
    scm.append_child(XmlElement::with_text("url", &config.url));
    scm.append_child(XmlElement::with_text("connection", &config.vcs_url));
    root.append_child(scm);

    let mut issue_management = XmlElement::new("issueManagement");
    issue_management.append_child(XmlElement::with_text("url", &config.issue_tracker_url));
    root.append_child(issue_management);

    Ok(())
}
