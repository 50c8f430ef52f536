//! Optimization metric used to rank trials.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AutoMLError;

/// Metric used to rank trials and models.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationMetric {
    /// Fraction of correctly classified rows
    #[default]
    MicroAccuracy,
    /// Mean per-class accuracy
    MacroAccuracy,
    /// Mean negative log probability of the true class
    LogLoss,
    /// Relative log-loss improvement over the label prior
    LogLossReduction,
}

impl OptimizationMetric {
    pub fn is_higher_better(self) -> bool {
        !matches!(self, OptimizationMetric::LogLoss)
    }

    /// Ordering that puts the better value first. NaN sorts last.
    pub fn best_first(self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                if self.is_higher_better() {
                    ord.reverse()
                } else {
                    ord
                }
            }
        }
    }

    /// Whether `candidate` is strictly better than `incumbent`.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        self.best_first(candidate, incumbent) == Ordering::Less
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationMetric::MicroAccuracy => "micro_accuracy",
            OptimizationMetric::MacroAccuracy => "macro_accuracy",
            OptimizationMetric::LogLoss => "log_loss",
            OptimizationMetric::LogLossReduction => "log_loss_reduction",
        }
    }
}

impl std::fmt::Display for OptimizationMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationMetric {
    type Err = AutoMLError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "micro_accuracy" | "microaccuracy" | "accuracy" => Ok(OptimizationMetric::MicroAccuracy),
            "macro_accuracy" | "macroaccuracy" => Ok(OptimizationMetric::MacroAccuracy),
            "log_loss" | "logloss" => Ok(OptimizationMetric::LogLoss),
            "log_loss_reduction" | "loglossreduction" => Ok(OptimizationMetric::LogLossReduction),
            other => Err(AutoMLError::InvalidParameter {
                name: "metric".to_string(),
                reason: format!("unknown metric '{}'", other),
            }),
        }
    }
}
