//! Multiclass trainers
//!
//! Every [`TrainerKind`] maps to one trainer here. Fitted models are wrapped
//! in [`ClassifierModel`] so they can be stored and persisted uniformly.

mod linear;
mod logistic;
mod maxent;
mod naive_bayes;
mod perceptron;
mod svm;

pub use linear::{Calibration, LinearBinary, LinearModel};
pub use logistic::LogisticRegression;
pub use maxent::MaximumEntropy;
pub use naive_bayes::{GaussianNaiveBayes, NaiveBayes};
pub use perceptron::AveragedPerceptron;
pub use svm::LinearSvm;

use automl_spi::{Classifier, Result, Trainer, TrainerKind, TrainingData};
use serde::{Deserialize, Serialize};

/// A fitted classifier of any supported family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifierModel {
    Linear(LinearModel),
    NaiveBayes(GaussianNaiveBayes),
}

impl Classifier for ClassifierModel {
    fn num_classes(&self) -> usize {
        match self {
            ClassifierModel::Linear(m) => m.num_classes(),
            ClassifierModel::NaiveBayes(m) => m.num_classes(),
        }
    }

    fn probabilities(&self, features: &[f64]) -> Vec<f64> {
        match self {
            ClassifierModel::Linear(m) => m.probabilities(features),
            ClassifierModel::NaiveBayes(m) => m.probabilities(features),
        }
    }
}

/// Fit the trainer described by `kind`.
pub fn fit_classifier(kind: &TrainerKind, data: &TrainingData, seed: u64) -> Result<ClassifierModel> {
    kind.validate()?;
    let model = match *kind {
        TrainerKind::AveragedPerceptronOva {
            learning_rate,
            epochs,
        } => ClassifierModel::Linear(
            AveragedPerceptron {
                learning_rate,
                epochs,
            }
            .fit(data, seed)?,
        ),
        TrainerKind::LinearSvmOva {
            learning_rate,
            lambda,
            epochs,
        } => ClassifierModel::Linear(
            LinearSvm {
                learning_rate,
                lambda,
                epochs,
            }
            .fit(data, seed)?,
        ),
        TrainerKind::LogisticRegressionOva {
            learning_rate,
            l2,
            epochs,
        } => ClassifierModel::Linear(
            LogisticRegression {
                learning_rate,
                l2,
                epochs,
            }
            .fit(data, seed)?,
        ),
        TrainerKind::MaximumEntropy {
            learning_rate,
            l2,
            epochs,
        } => ClassifierModel::Linear(
            MaximumEntropy {
                learning_rate,
                l2,
                epochs,
            }
            .fit(data, seed)?,
        ),
        TrainerKind::NaiveBayes => ClassifierModel::NaiveBayes(NaiveBayes.fit(data, seed)?),
    };
    Ok(model)
}
