//! AutoML error types.

use data_spi::DataError;
use pipeline_spi::PipelineError;
use thiserror::Error;

/// Errors that can occur during AutoML operations.
#[derive(Error, Debug, Clone)]
pub enum AutoMLError {
    /// Insufficient rows for the operation.
    #[error("Insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Classification needs at least two distinct labels.
    #[error("Insufficient classes: need at least 2 distinct labels, got {actual}")]
    InsufficientClasses { actual: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Optimization diverged or failed to converge.
    #[error("Optimization failed to converge after {iterations} iterations")]
    ConvergenceFailure { iterations: usize },

    /// Numerical computation error.
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Saving or loading a model archive failed.
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// Archive schema differs from the schema the caller expects.
    #[error("Schema mismatch: expected {expected}, found {found}")]
    SchemaMismatch { expected: String, found: String },

    /// Dataset could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Feature transformation failed.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}
