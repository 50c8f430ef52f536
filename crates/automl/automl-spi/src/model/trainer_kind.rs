//! Trainer configurations for AutoML.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AutoMLError;

/// A trainer with its hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrainerKind {
    /// One-versus-all averaged perceptron
    AveragedPerceptronOva { learning_rate: f64, epochs: usize },
    /// One-versus-all linear SVM (hinge loss SGD)
    LinearSvmOva { learning_rate: f64, lambda: f64, epochs: usize },
    /// One-versus-all logistic regression
    LogisticRegressionOva { learning_rate: f64, l2: f64, epochs: usize },
    /// Multinomial logistic regression
    MaximumEntropy { learning_rate: f64, l2: f64, epochs: usize },
    /// Gaussian naive Bayes
    NaiveBayes,
}

impl TrainerKind {
    pub const fn averaged_perceptron() -> Self {
        TrainerKind::AveragedPerceptronOva {
            learning_rate: 1.0,
            epochs: 10,
        }
    }

    pub const fn linear_svm() -> Self {
        TrainerKind::LinearSvmOva {
            learning_rate: 0.1,
            lambda: 1e-3,
            epochs: 10,
        }
    }

    pub const fn logistic_regression() -> Self {
        TrainerKind::LogisticRegressionOva {
            learning_rate: 0.5,
            l2: 1e-4,
            epochs: 20,
        }
    }

    pub const fn maximum_entropy() -> Self {
        TrainerKind::MaximumEntropy {
            learning_rate: 0.5,
            l2: 1e-4,
            epochs: 20,
        }
    }

    /// Every trainer with default hyperparameters, in search order.
    pub fn catalogue() -> [TrainerKind; 5] {
        [
            Self::averaged_perceptron(),
            Self::linear_svm(),
            Self::logistic_regression(),
            Self::maximum_entropy(),
            TrainerKind::NaiveBayes,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrainerKind::AveragedPerceptronOva { .. } => "AveragedPerceptronOva",
            TrainerKind::LinearSvmOva { .. } => "LinearSvmOva",
            TrainerKind::LogisticRegressionOva { .. } => "LogisticRegressionOva",
            TrainerKind::MaximumEntropy { .. } => "MaximumEntropy",
            TrainerKind::NaiveBayes => "NaiveBayes",
        }
    }

    /// Whether the trainer has hyperparameters worth sampling.
    pub fn is_tunable(&self) -> bool {
        !matches!(self, TrainerKind::NaiveBayes)
    }

    pub fn validate(&self) -> Result<(), AutoMLError> {
        let (learning_rate, penalty, epochs) = match *self {
            TrainerKind::AveragedPerceptronOva {
                learning_rate,
                epochs,
            } => (learning_rate, 0.0, epochs),
            TrainerKind::LinearSvmOva {
                learning_rate,
                lambda,
                epochs,
            } => (learning_rate, lambda, epochs),
            TrainerKind::LogisticRegressionOva {
                learning_rate,
                l2,
                epochs,
            }
            | TrainerKind::MaximumEntropy {
                learning_rate,
                l2,
                epochs,
            } => (learning_rate, l2, epochs),
            TrainerKind::NaiveBayes => return Ok(()),
        };

        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(AutoMLError::InvalidParameter {
                name: "learning_rate".to_string(),
                reason: format!("must be positive, got {}", learning_rate),
            });
        }
        if !(penalty.is_finite() && penalty >= 0.0) {
            return Err(AutoMLError::InvalidParameter {
                name: "regularization".to_string(),
                reason: format!("must be non-negative, got {}", penalty),
            });
        }
        if epochs == 0 {
            return Err(AutoMLError::InvalidParameter {
                name: "epochs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TrainerKind {
    fn default() -> Self {
        Self::averaged_perceptron()
    }
}

impl std::fmt::Display for TrainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainerKind::AveragedPerceptronOva {
                learning_rate,
                epochs,
            } => write!(
                f,
                "AveragedPerceptronOva(lr={:.2}, epochs={})",
                learning_rate, epochs
            ),
            TrainerKind::LinearSvmOva {
                learning_rate,
                lambda,
                epochs,
            } => write!(
                f,
                "LinearSvmOva(lr={:.2}, lambda={:.0e}, epochs={})",
                learning_rate, lambda, epochs
            ),
            TrainerKind::LogisticRegressionOva {
                learning_rate,
                l2,
                epochs,
            } => write!(
                f,
                "LogisticRegressionOva(lr={:.2}, l2={:.0e}, epochs={})",
                learning_rate, l2, epochs
            ),
            TrainerKind::MaximumEntropy {
                learning_rate,
                l2,
                epochs,
            } => write!(
                f,
                "MaximumEntropy(lr={:.2}, l2={:.0e}, epochs={})",
                learning_rate, l2, epochs
            ),
            TrainerKind::NaiveBayes => write!(f, "NaiveBayes"),
        }
    }
}

impl FromStr for TrainerKind {
    type Err = AutoMLError;

    /// Parse a trainer name into its default configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "averaged_perceptron" | "averaged_perceptron_ova" | "averagedperceptronova" => {
                Ok(Self::averaged_perceptron())
            }
            "linear_svm" | "linear_svm_ova" | "linearsvmova" => Ok(Self::linear_svm()),
            "logistic_regression" | "logistic_regression_ova" | "logisticregressionova" => {
                Ok(Self::logistic_regression())
            }
            "maximum_entropy" | "maxent" | "maximumentropy" => Ok(Self::maximum_entropy()),
            "naive_bayes" | "naivebayes" => Ok(TrainerKind::NaiveBayes),
            other => Err(AutoMLError::InvalidParameter {
                name: "trainer".to_string(),
                reason: format!("unknown trainer '{}'", other),
            }),
        }
    }
}
