//! AutoML Service Provider Interface
//!
//! Defines traits for automatic multiclass classification:
//! - Trainers and the classifiers they produce
//! - Candidate search strategies
//! - Experiment-driven model selection

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at the crate root
pub use contract::{Classifier, ModelSelector, SearchStrategy, Trainer};
pub use error::AutoMLError;
pub use model::{
    ExperimentResult, MetricSet, OptimizationMetric, RunDetail, TrainerKind, TrainingData,
    TrialResult,
};

/// Result type for AutoML operations.
pub type Result<T> = std::result::Result<T, AutoMLError>;
