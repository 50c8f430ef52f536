//! Linear SVM trained with hinge-loss SGD, one-versus-all.

use automl_spi::{AutoMLError, Result, Trainer, TrainingData};

use super::linear::{dot, fit_one_versus_all, Calibration, EpochOrder, LinearBinary, LinearModel};

#[derive(Debug, Clone, Copy)]
pub struct LinearSvm {
    pub learning_rate: f64,
    pub lambda: f64,
    pub epochs: usize,
}

impl LinearSvm {
    fn fit_binary(&self, features: &[Vec<f64>], targets: &[f64], seed: u64) -> LinearBinary {
        let mut model = LinearBinary::zeros(features[0].len());
        let mut order = EpochOrder::new(features.len(), seed);
        let shrink = 1.0 - self.learning_rate * self.lambda;

        for _ in 0..self.epochs {
            for &i in order.next_epoch() {
                let x = &features[i];
                let y = targets[i];
                let margin = y * (dot(&model.weights, x) + model.bias);
                for w in model.weights.iter_mut() {
                    *w *= shrink;
                }
                if margin < 1.0 {
                    for (w, xi) in model.weights.iter_mut().zip(x) {
                        *w += self.learning_rate * y * xi;
                    }
                    model.bias += self.learning_rate * y;
                }
            }
        }
        model
    }
}

impl Trainer for LinearSvm {
    type Model = LinearModel;

    fn name(&self) -> &'static str {
        "LinearSvmOva"
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
