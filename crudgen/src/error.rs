//! Error types and error handling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Usage line printed when a required input is missing
pub const USAGE: &str = "crudgen model <name> --table=<table> [--prefix=<prefix>]";

/// A required generation input was not supplied
///
/// Generation cannot start without it, so no model is built and nothing is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing required input: {field}")]
pub struct MissingInputError {
    /// Name of the missing input (`name` or `table`)
    pub field: &'static str,
}

impl MissingInputError {
    /// Missing table identifier
    #[must_use]
    pub const fn table() -> Self {
        Self { field: "table" }
    }

    /// Missing class name
    #[must_use]
    pub const fn name() -> Self {
        Self { field: "name" }
    }

    /// Usage line for the command that needs this input
    #[must_use]
    pub const fn usage(&self) -> &'static str {
        USAGE
    }
}

/// Errors raised while generating a model file
#[derive(Debug, Error)]
pub enum CrudGenError {
    /// Required input absent
    #[error(transparent)]
    MissingInput(#[from] MissingInputError),

    /// Template could not be read
    #[error("failed to read template {}: {source}", path.display())]
    Template {
        /// Template path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Schema source returned something unusable
    #[error("schema error: {0}")]
    Schema(String),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Descriptor file could not be parsed
    #[error("invalid column descriptor file: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CrudGenError {
    /// Create a schema error from a message
    #[must_use]
    pub fn schema<T: Into<String>>(msg: T) -> Self {
        Self::Schema(msg.into())
    }

    /// The missing input, if this error was caused by one
    #[must_use]
    pub const fn missing_input(&self) -> Option<&MissingInputError> {
        match self {
            Self::MissingInput(err) => Some(err),
            _ => None,
        }
    }
}

impl From<figment::Error> for CrudGenError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias for generation operations
pub type Result<T, E = CrudGenError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_names_field() {
        assert_eq!(MissingInputError::table().to_string(), "missing required input: table");
        assert_eq!(MissingInputError::name().field, "name");
        assert!(MissingInputError::table().usage().contains("--table=<table>"));
    }

    #[test]
    fn test_missing_input_is_transparent() {
        let err = CrudGenError::from(MissingInputError::table());
        assert_eq!(err.to_string(), "missing required input: table");
        assert_eq!(err.missing_input(), Some(&MissingInputError::table()));
    }

    #[test]
    fn test_schema_error() {
        let err = CrudGenError::schema("no columns");
        assert!(err.missing_input().is_none());
        assert_eq!(err.to_string(), "schema error: no columns");
    }
}
