//! Error types for the CUBRID dialect.

use thiserror::Error;

/// The main error type for dialect operations.
#[derive(Debug, Error)]
pub enum DialectError {
    /// Missing or malformed connection URL.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A DDL or statement render request violates a structural precondition.
    #[error("Compile error: {0}")]
    Compile(String),

    /// The requested native driver is not available to this dialect.
    #[error("Driver unavailable: '{0}'")]
    DriverUnavailable(String),

    /// The external driver failed while executing a statement.
    #[error("Driver error: {0}")]
    Driver(String),

    /// Catalog or URL text could not be parsed.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DialectError {
    /// Create a parse error at the given position.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Create a compile error.
    pub fn compile(message: impl Into<String>) -> Self {
        Self::Compile(message.into())
    }

    /// Create a driver error from anything the driver reports.
    pub fn driver(err: impl std::fmt::Display) -> Self {
        Self::Driver(err.to_string())
    }
}

/// Result type alias for dialect operations.
pub type DialectResult<T> = Result<T, DialectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DialectError::parse(5, "unexpected character");
        assert_eq!(
            err.to_string(),
            "Parse error at position 5: unexpected character"
        );
    }

    #[test]
    fn test_compile_error_display() {
        let err = DialectError::compile("CREATE INDEX requires that the index have a name");
        assert_eq!(
            err.to_string(),
            "Compile error: CREATE INDEX requires that the index have a name"
        );
    }
}
