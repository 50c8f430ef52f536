//! AutoML Core
//!
//! Core implementations for automatic sensor classification:
//! - Multiclass trainers (one-versus-all linear models, maximum entropy, naive Bayes)
//! - Evaluation metrics
//! - The featurization pipeline and the trained model artifact
//! - Time-boxed random search over trainers
//! - Cross-validation and model persistence

pub mod archive;
mod cross_validation;
mod experiment;
mod metrics;
mod model;
mod search;
mod split;
pub mod trainers;

#[cfg(test)]
mod test_support;

pub use cross_validation::{cross_validate, CrossValidationResult};
pub use experiment::AutoML;
pub use metrics::{MulticlassEvaluator, PROBABILITY_FLOOR};
pub use model::{PipelineBuilder, Prediction, TrainedModel, FEATURES};
pub use search::RandomSearch;
pub use split::{k_fold_indices, train_validation_split};
pub use trainers::{fit_classifier, ClassifierModel};

// Re-export from API for convenience
pub use automl_api::{
    AutoMLConfig, AutoMLError, MetricSet, OptimizationMetric, Result, TrainerKind, TrialResult,
};

// Re-export SPI traits
pub use automl_spi::{
    Classifier, ExperimentResult, ModelSelector, RunDetail, SearchStrategy, Trainer, TrainingData,
};
