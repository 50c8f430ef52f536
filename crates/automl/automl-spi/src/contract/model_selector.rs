//! Model selection trait for AutoML.

use data_spi::Dataset;

use crate::error::AutoMLError;
use crate::model::{ExperimentResult, TrialResult};

/// Result type for model selector operations.
pub type Result<T> = std::result::Result<T, AutoMLError>;

/// Trait for experiment-driven model selection strategies.
pub trait ModelSelector {
    /// Model type produced by each successful run.
    type Model;

    /// Run the experiment on `data`, calling `progress` once per finished trial.
    ///
    /// Trial failures are recorded in the result rather than returned.
    fn execute(
        &self,
        data: &Dataset,
        progress: &mut dyn FnMut(&TrialResult),
    ) -> Result<ExperimentResult<Self::Model>>;
}
