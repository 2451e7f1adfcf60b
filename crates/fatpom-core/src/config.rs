//! Immutable publisher-wide configuration.
//!
//! Built once at the start of an orchestration pass and passed explicitly
//! to every publication step; nothing here is mutated after construction.

use crate::error::{PublishError, Result};

/// How embedded projects' `implementation` dependencies propagate to the
/// consuming project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedPolicy {
    /// Only the direct `implementation` dependencies of each embedded
    /// project are propagated.
    #[default]
    DirectOnly,
    /// Project-to-project edges are followed recursively; every reachable
    /// embedded project contributes its `implementation` dependencies.
    Transitive,
}

/// A developer entry for the published POM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Publisher-wide settings for a publishing pass.
#[derive(Debug, Clone, Default)]
pub struct PublisherConfig {
    pub display_name: String,
    pub description: String,
    pub group: String,
    pub version: String,
    pub url: String,
    pub vcs_url: String,
    pub issue_tracker_url: String,
    pub tags: Vec<String>,
    pub developers: Vec<Developer>,
    /// True when this pass produces signed release artifacts.
    pub release: bool,
    pub embed_policy: EmbedPolicy,
}

impl PublisherConfig {
    /// Checks the coordinates every publication needs.
    ///
    /// The version must be set to something other than the build tool's
    /// `"unspecified"` placeholder, and the group must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() || self.version == "unspecified" {
            return Err(PublishError::InvalidConfig("Version not set".into()));
        }
        if self.group.is_empty() {
            return Err(PublishError::InvalidConfig("Group not set".into()));
        }
        Ok(())
    }
}
