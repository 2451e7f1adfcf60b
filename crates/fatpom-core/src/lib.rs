//! Core abstractions for the fatpom publishing toolkit.
//!
//! This crate provides the pieces shared by the POM transformation and
//! release crates: the resolved build-dependency model, the immutable
//! publisher configuration, embedded-dependency planning, and the
//! workspace-wide error type.

pub mod config;
pub mod dependency;
pub mod embed;
pub mod error;

pub use config::{Developer, EmbedPolicy, PublisherConfig};
pub use dependency::{Coordinate, DependencyKind, ResolvedDependency, SubprojectDeps};
pub use embed::{EmbedPlan, EmbedSet};
pub use error::{PublishError, Result};
