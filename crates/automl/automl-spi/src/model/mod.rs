//! Model module containing AutoML data structures.
//!
//! This module defines data structures for automatic machine learning:
//! - [`TrainerKind`] - A trainer configuration with its hyperparameters
//! - [`MetricSet`] / [`OptimizationMetric`] - Multiclass evaluation metrics
//! - [`TrialResult`] / [`RunDetail`] / [`ExperimentResult`] - Search outcomes
//! - [`TrainingData`] - Validated feature rows and label keys

mod experiment_result;
mod metric;
mod metric_set;
mod trainer_kind;
mod training_data;
mod trial_result;

pub use experiment_result::{ExperimentResult, RunDetail};
pub use metric::OptimizationMetric;
pub use metric_set::MetricSet;
pub use trainer_kind::TrainerKind;
pub use training_data::TrainingData;
pub use trial_result::TrialResult;
