//! Workspace-wide error type for the publishing pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to parse {file_type}: {source}")]
    ParseError {
        file_type: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid publisher configuration: {0}")]
    InvalidConfig(String),

    #[error("Dependency '{name}' has no {field} coordinate")]
    MissingCoordinate { name: String, field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, PublishError>;
