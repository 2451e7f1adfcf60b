//! Errors specific to release preparation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("\"## Unreleased\" heading not found in changelog")]
    HeadingNotFound,

    #[error("Could not find minor version in: {version}")]
    InvalidVersion { version: String },

    #[error("Property '{0}' not found")]
    PropertyNotFound(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReleaseError>;

impl From<ReleaseError> for fatpom_core::PublishError {
    fn from(err: ReleaseError) -> Self {
        match err {
            ReleaseError::HeadingNotFound => Self::ParseError {
                file_type: "CHANGELOG.md".into(),
                source: Box::new(std::io::Error::other(
                    "\"## Unreleased\" heading not found",
                )),
            },
            ReleaseError::InvalidVersion { version } => {
                Self::InvalidConfig(format!("Could not find minor version in: {version}"))
            }
            ReleaseError::PropertyNotFound(key) => {
                Self::InvalidConfig(format!("Property '{key}' not found"))
            }
            ReleaseError::Io(e) => Self::Io(e),
        }
    }
}
