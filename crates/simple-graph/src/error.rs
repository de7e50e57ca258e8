//! Error types for simple-graph.

use thiserror::Error;

/// Graph error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex with the same ID is already registered.
    #[error("Vertex '{0}' already exists")]
    DuplicateVertex(String),

    /// A referenced vertex ID is not registered.
    #[error("Vertex '{0}' not found")]
    MissingVertex(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns a stable error code for this error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DuplicateVertex(_) => "SG-001",
            Self::MissingVertex(_) => "SG-002",
            Self::Config(_) => "SG-003",
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
