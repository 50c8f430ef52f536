//! Gaussian naive Bayes.

use automl_spi::{AutoMLError, Classifier, Result, Trainer, TrainingData};
use serde::{Deserialize, Serialize};

use super::linear::softmax;

const VARIANCE_FLOOR: f64 = 1e-6;

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBayes;

/// Per-class feature means and variances plus log priors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianNaiveBayes {
    pub log_priors: Vec<f64>,
    pub means: Vec<Vec<f64>>,
    pub variances: Vec<Vec<f64>>,
}

impl GaussianNaiveBayes {
    fn log_joint(&self, x: &[f64]) -> Vec<f64> {
        self.log_priors
            .iter()
            .zip(self.means.iter().zip(&self.variances))
            .map(|(prior, (means, vars))| {
                let likelihood: f64 = x
                    .iter()
                    .zip(means.iter().zip(vars))
                    .map(|(xi, (m, v))| {
                        -0.5 * (2.0 * std::f64::consts::PI * v).ln() - (xi - m).powi(2) / (2.0 * v)
                    })
                    .sum();
                prior + likelihood
            })
            .collect()
    }
}

impl Classifier for GaussianNaiveBayes {
    fn num_classes(&self) -> usize {
        self.log_priors.len()
    }

    fn probabilities(&self, features: &[f64]) -> Vec<f64> {
        softmax(&self.log_joint(features))
    }
}

impl Trainer for NaiveBayes {
    type Model = GaussianNaiveBayes;

    fn name(&self) -> &'static str {
        "NaiveBayes"
    }

    fn fit(&self, data: &TrainingData, _seed: u64) -> Result<GaussianNaiveBayes> {
        let k = data.num_classes();
        let width = data.width();
        let mut counts = vec![0usize; k];
        let mut sums = vec![vec![0.0; width]; k];
        let mut squares = vec![vec![0.0; width]; k];

        for (x, &label) in data.features().iter().zip(data.labels()) {
            counts[label] += 1;
            for j in 0..width {
                sums[label][j] += x[j];
                squares[label][j] += x[j] * x[j];
            }
        }

        let n = data.len() as f64;
        let mut model = GaussianNaiveBayes {
            log_priors: Vec::with_capacity(k),
            means: Vec::with_capacity(k),
            variances: Vec::with_capacity(k),
        };
        for c in 0..k {
            if counts[c] == 0 {
                model.log_priors.push(f64::NEG_INFINITY);
                model.means.push(vec![0.0; width]);
                model.variances.push(vec![1.0; width]);
                continue;
            }
            let count = counts[c] as f64;
            let means: Vec<f64> = sums[c].iter().map(|s| s / count).collect();
            let variances: Vec<f64> = squares[c]
                .iter()
                .zip(&means)
                .map(|(sq, m)| (sq / count - m * m).max(0.0) + VARIANCE_FLOOR)
                .collect();
            model.log_priors.push((count / n).ln());
            model.means.push(means);
            model.variances.push(variances);
        }

        if model.means.iter().flatten().any(|m| !m.is_finite()) {
            return Err(AutoMLError::NumericalError(
                "non-finite class means".to_string(),
            ));
        }
        Ok(model)
    }
}
