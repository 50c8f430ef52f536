//! Data error types.

use thiserror::Error;

/// Dataset loading errors.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// Source file does not exist
    #[error("Data source not found: {0}")]
    NotFound(String),

    /// Reading the source failed
    #[error("I/O error: {0}")]
    Io(String),

    /// A record could not be parsed into the schema
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: u64, reason: String },

    /// A record is too short to contain a schema column
    #[error("Missing column '{column}' at line {line}")]
    MissingColumn { column: String, line: u64 },

    /// Source contained a header but no records
    #[error("No records in {0}")]
    Empty(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DataError::NotFound("training.csv".to_string());
        assert_eq!(error.to_string(), "Data source not found: training.csv");
    }

    #[test]
    fn test_parse_error() {
        let error = DataError::Parse {
            line: 7,
            reason: "invalid float literal".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Parse error at line 7: invalid float literal"
        );
    }

    #[test]
    fn test_missing_column_error() {
        let error = DataError::MissingColumn {
            column: "Label".to_string(),
            line: 3,
        };
        assert_eq!(error.to_string(), "Missing column 'Label' at line 3");
    }

    #[test]
    fn test_empty_error() {
        let error = DataError::Empty("testing.csv".to_string());
        assert_eq!(error.to_string(), "No records in testing.csv");
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(DataError::Io("denied".to_string()));
        assert!(matches!(result.unwrap_err(), DataError::Io(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(DataError::Io("test".to_string()));
        assert_eq!(error.to_string(), "I/O error: test");
    }
}
