//! Custom error types for fincalc
//!
//! Calculations themselves never fail. These errors cover everything around
//! them: configuration, argument parsing, debt list import, result export and
//! the calculation history log.

use thiserror::Error;

/// The main error type for fincalc operations
#[derive(Error, Debug)]
pub enum FincalcError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import errors (debt lists)
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FincalcError {
    /// Create a validation error for a malformed argument
    pub fn invalid_argument(name: &str, value: &str, expected: &str) -> Self {
        Self::Validation(format!(
            "Invalid {}: '{}' (expected {})",
            name, value, expected
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FincalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FincalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FincalcError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for FincalcError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for fincalc operations
pub type FincalcResult<T> = Result<T, FincalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FincalcError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_argument() {
        let err = FincalcError::invalid_argument("rate", "abc", "a percentage");
        assert_eq!(
            err.to_string(),
            "Validation error: Invalid rate: 'abc' (expected a percentage)"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FincalcError = io_err.into();
        assert!(matches!(err, FincalcError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FincalcError = json_err.into();
        assert!(matches!(err, FincalcError::Json(_)));
    }
}
