//! Logistic regression trained with SGD, one-versus-all.

use automl_spi::{AutoMLError, Result, Trainer, TrainingData};

use super::linear::{
    fit_one_versus_all, sigmoid, Calibration, EpochOrder, LinearBinary, LinearModel,
};

#[derive(Debug, Clone, Copy)]
pub struct LogisticRegression {
    pub learning_rate: f64,
    pub l2: f64,
    pub epochs: usize,
}

impl LogisticRegression {
    fn fit_binary(&self, features: &[Vec<f64>], targets: &[f64], seed: u64) -> LinearBinary {
        let mut model = LinearBinary::zeros(features[0].len());
        let mut order = EpochOrder::new(features.len(), seed);

        for _ in 0..self.epochs {
            for &i in order.next_epoch() {
                let x = &features[i];
                let y = if targets[i] > 0.0 { 1.0 } else { 0.0 };
                let gradient = sigmoid(model.score(x)) - y;
                for (w, xi) in model.weights.iter_mut().zip(x) {
                    *w -= self.learning_rate * (gradient * xi + self.l2 * *w);
                }
                model.bias -= self.learning_rate * gradient;
            }
        }
        model
    }
}

impl Trainer for LogisticRegression {
    type Model = LinearModel;

    fn name(&self) -> &'static str {
        "LogisticRegressionOva"
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
            calibration: Calibration::Sigmoid,
        };
        if !model.is_finite() {
            return Err(AutoMLError::ConvergenceFailure {
                iterations: self.epochs,
            });
        }
        Ok(model)
    }
}
