//! Averaged perceptron, one-versus-all.

use automl_spi::{AutoMLError, Result, Trainer, TrainingData};

use super::linear::{dot, fit_one_versus_all, Calibration, EpochOrder, LinearBinary, LinearModel};

/// Averaged perceptron; the returned weights are the mean over every update step.
#[derive(Debug, Clone, Copy)]
pub struct AveragedPerceptron {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl AveragedPerceptron {
    fn fit_binary(&self, features: &[Vec<f64>], targets: &[f64], seed: u64) -> LinearBinary {
        let width = features[0].len();
        let mut current = LinearBinary::zeros(width);
        let mut sum = LinearBinary::zeros(width);
        let mut steps = 0usize;
        let mut order = EpochOrder::new(features.len(), seed);

        for _ in 0..self.epochs {
            for &i in order.next_epoch() {
                let x = &features[i];
                let y = targets[i];
                if y * (dot(&current.weights, x) + current.bias) <= 0.0 {
                    for (w, xi) in current.weights.iter_mut().zip(x) {
                        *w += self.learning_rate * y * xi;
                    }
                    current.bias += self.learning_rate * y;
                }
                for (s, w) in sum.weights.iter_mut().zip(&current.weights) {
                    *s += w;
                }
                sum.bias += current.bias;
                steps += 1;
            }
        }

        let n = steps.max(1) as f64;
        LinearBinary {
            weights: sum.weights.iter().map(|s| s / n).collect(),
            bias: sum.bias / n,
        }
    }
}

impl Trainer for AveragedPerceptron {
    type Model = LinearModel;

    fn name(&self) -> &'static str {
        "AveragedPerceptronOva"
    }

    fn fit(&self, data: &TrainingData, seed: u64) -> Result<LinearModel> {
        let rows = fit_one_versus_all(
            data.features(),
            data.labels(),
            data.num_classes(),
            seed,
            |x, y, s| self.fit_binary(x, y, s),
        );
        let model = LinearModel {
            rows,
            calibration: Calibration::Softmax,
        };
        if !model.is_finite() {
            return Err(AutoMLError::ConvergenceFailure {
                iterations: self.epochs,
            });
        }
        Ok(model)
    }
}
