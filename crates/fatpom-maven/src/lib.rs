//! Maven POM reading and fat-POM synthesis.
//!
//! This crate provides the POM side of the fatpom toolkit: extracting the
//! dependencies a published POM declares, appending the runtime
//! dependencies of embedded subprojects to a target POM exactly once, and
//! assembling publication metadata.

pub mod appender;
pub mod document;
pub mod error;
pub mod merge;
pub mod metadata;
pub mod reader;
pub mod types;

pub use appender::DependencyAppender;
pub use document::XmlElement;
pub use error::{PomError, Result};
pub use merge::{ConfigurationAddition, configuration_additions};
pub use metadata::apply_project_metadata;
pub use reader::{parse_pom, read_dependencies, read_pom_file};
pub use types::{PomDependency, PomScope};
