//! Errors specific to POM reading and fat-POM synthesis.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PomError {
    #[error("Failed to parse POM: {message}")]
    Parse { message: String },

    #[error("Missing <{element}> element in POM")]
    MissingElement { element: &'static str },

    #[error("Dependency '{name}' has no {field} coordinate")]
    MissingCoordinate { name: String, field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PomError>;

impl From<quick_xml::Error> for PomError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

impl From<PomError> for fatpom_core::PublishError {
    fn from(err: PomError) -> Self {
        match err {
            PomError::Parse { message } => Self::ParseError {
                file_type: "POM".into(),
                source: Box::new(std::io::Error::other(message)),
            },
            PomError::MissingElement { element } => Self::ParseError {
                file_type: "POM".into(),
                source: Box::new(std::io::Error::other(format!(
                    "missing <{element}> element"
                ))),
            },
            PomError::MissingCoordinate { name, field } => {
                Self::MissingCoordinate { name, field }
            }
            PomError::Io(e) => Self::Io(e),
        }
    }
}
