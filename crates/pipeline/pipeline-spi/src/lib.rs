//! Pipeline Service Provider Interface
//!
//! Defines traits for feature transformation pipelines.

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur during pipeline operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Row width differs from the fitted width
    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Step used before `fit`
    #[error("Step '{0}' has not been fitted")]
    NotFitted(String),
}

/// Common trait for fitted row transformation steps
pub trait PipelineStep: Send + Sync {
    /// Fit the step to rows (learn parameters)
    fn fit(&mut self, rows: &[Vec<f64>]) -> Result<()>;

    /// Transform one row forward
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>>;

    /// Name of this step
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let error = PipelineError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: expected 3 values, got 2"
        );
    }

    #[test]
    fn test_not_fitted_message() {
        let error = PipelineError::NotFitted("normalize_min_max".to_string());
        assert_eq!(error.to_string(), "Step 'normalize_min_max' has not been fitted");
    }
}
