//! Error types for Xinoxano Core

use std::path::PathBuf;

use thiserror::Error;

use crate::limits::ValidationError;

/// Result type alias using Xinoxano's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Xinoxano error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Lexicon not found or unreadable: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lexicon {} is not valid UTF-8 (line {line})", path.display())]
    Encoding { path: PathBuf, line: usize },

    #[error("Node {0} not in graph")]
    NodeNotFound(String),

    #[error("No path between {from} and {to}")]
    NoPathExists { from: String, to: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
