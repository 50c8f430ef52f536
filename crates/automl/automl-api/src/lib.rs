//! AutoML Consumer API
//!
//! Configuration types and DTOs for AutoML consumers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use automl_spi::{
    AutoMLError, Classifier, ExperimentResult, MetricSet, ModelSelector, OptimizationMetric,
    Result, RunDetail, SearchStrategy, Trainer, TrainerKind, TrainingData, TrialResult,
};

/// Configuration for a time-boxed AutoML experiment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoMLConfig {
    /// Metric the experiment ranks its own runs by
    pub metric: OptimizationMetric,
    /// Wall-clock budget for the whole search, in seconds
    pub time_budget_secs: u64,
    /// Upper bound on the number of candidate trials
    pub max_trials: usize,
    /// Portion of the training set held out for trial validation
    pub validation_ratio: f64,
    /// Seed for splits, shuffling and candidate sampling
    pub seed: u64,
}

impl Default for AutoMLConfig {
    fn default() -> Self {
        Self {
            metric: OptimizationMetric::MicroAccuracy,
            time_budget_secs: 30,
            max_trials: 100,
            validation_ratio: 0.2,
            seed: 1,
        }
    }
}

impl AutoMLConfig {
    /// Create a new configuration with the specified metric
    pub fn with_metric(metric: OptimizationMetric) -> Self {
        Self {
            metric,
            ..Default::default()
        }
    }

    /// Set the search time budget in seconds
    pub fn time_budget_secs(mut self, secs: u64) -> Self {
        self.time_budget_secs = secs.max(1);
        self
    }

    /// Set the maximum number of trials
    pub fn max_trials(mut self, trials: usize) -> Self {
        self.max_trials = trials.max(1);
        self
    }

    /// Set the validation ratio for the train/validation split
    pub fn validation_ratio(mut self, ratio: f64) -> Self {
        self.validation_ratio = ratio.clamp(0.05, 0.5);
        self
    }

    /// Set the seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn time_budget(&self) -> Duration {
        Duration::from_secs(self.time_budget_secs)
    }
}
