//! Outcome of one search trial.

use crate::error::AutoMLError;

use super::{MetricSet, OptimizationMetric, TrainerKind};

/// One completed trial, successful or not.
#[derive(Debug, Clone)]
pub struct TrialResult {
    /// Name shown in reports.
    pub trainer_name: String,
    /// Configuration that was tried.
    pub trainer: TrainerKind,
    /// Validation metrics; `None` when the trial failed.
    pub validation_metrics: Option<MetricSet>,
    /// Wall-clock fit and evaluation time.
    pub runtime_seconds: f64,
    /// Error the trial failed with.
    pub failure: Option<AutoMLError>,
}

impl TrialResult {
    pub fn succeeded(trainer: TrainerKind, metrics: MetricSet, runtime_seconds: f64) -> Self {
        Self {
            trainer_name: trainer.name().to_string(),
            trainer,
            validation_metrics: Some(metrics),
            runtime_seconds,
            failure: None,
        }
    }

    pub fn failed(trainer: TrainerKind, error: AutoMLError, runtime_seconds: f64) -> Self {
        Self {
            trainer_name: trainer.name().to_string(),
            trainer,
            validation_metrics: None,
            runtime_seconds,
            failure: Some(error),
        }
    }

    /// Metric value, if the trial produced metrics.
    pub fn metric(&self, metric: OptimizationMetric) -> Option<f64> {
        self.validation_metrics.map(|m| m.value(metric))
    }

    /// Completed without failure and with a non-NaN value for `metric`.
    pub fn is_viable(&self, metric: OptimizationMetric) -> bool {
        self.failure.is_none() && self.metric(metric).is_some_and(|v| !v.is_nan())
    }
}
