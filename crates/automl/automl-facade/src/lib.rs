//! AutoML Facade
//!
//! High-level API for automatic sensor classification. Re-exports all public
//! types from the automl stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use automl_facade::prelude::*;
//!
//! let automl = AutoML::new(AutoMLConfig::default().time_budget_secs(10));
//! let result = automl.execute(&dataset, &mut |trial| println!("{}", trial.trainer_name))?;
//! let best = result.best_run();
//! ```

// Re-export everything from core (which includes API and SPI)
pub use automl_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use automl_spi::{Classifier, ModelSelector, SearchStrategy, Trainer};

    // Core types
    pub use automl_api::{AutoMLConfig, OptimizationMetric, TrainerKind};

    // Results and errors
    pub use automl_spi::{
        AutoMLError, ExperimentResult, MetricSet, Result, RunDetail, TrialResult,
    };

    // Implementations
    pub use automl_core::{
        archive, cross_validate, AutoML, CrossValidationResult, PipelineBuilder, Prediction,
        RandomSearch, TrainedModel,
    };
}
