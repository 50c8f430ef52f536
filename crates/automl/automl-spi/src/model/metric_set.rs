//! Multiclass evaluation metrics.

use serde::{Deserialize, Serialize};

use super::OptimizationMetric;

/// Metrics from evaluating a classifier on a labeled set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub micro_accuracy: f64,
    pub macro_accuracy: f64,
    pub log_loss: f64,
    pub log_loss_reduction: f64,
}

impl MetricSet {
    /// Placeholder for a missing evaluation.
    pub fn nan() -> Self {
        Self {
            micro_accuracy: f64::NAN,
            macro_accuracy: f64::NAN,
            log_loss: f64::NAN,
            log_loss_reduction: f64::NAN,
        }
    }

    pub fn value(&self, metric: OptimizationMetric) -> f64 {
        match metric {
            OptimizationMetric::MicroAccuracy => self.micro_accuracy,
            OptimizationMetric::MacroAccuracy => self.macro_accuracy,
            OptimizationMetric::LogLoss => self.log_loss,
            OptimizationMetric::LogLossReduction => self.log_loss_reduction,
        }
    }
}
