//! Multinomial logistic regression (maximum entropy) trained with SGD.

use automl_spi::{AutoMLError, Result, Trainer, TrainingData};

use super::linear::{softmax, Calibration, EpochOrder, LinearBinary, LinearModel};

#[derive(Debug, Clone, Copy)]
pub struct MaximumEntropy {
    pub learning_rate: f64,
    pub l2: f64,
    pub epochs: usize,
}

impl Trainer for MaximumEntropy {
    type Model = LinearModel;

    fn name(&self) -> &'static str {
        "MaximumEntropy"
    }

    fn fit(&self, data: &TrainingData, seed: u64) -> Result<LinearModel> {
        let mut model = LinearModel {
            rows: vec![LinearBinary::zeros(data.width()); data.num_classes()],
            calibration: Calibration::Softmax,
        };
        let mut order = EpochOrder::new(data.len(), seed);

        for _ in 0..self.epochs {
            for &i in order.next_epoch() {
                let x = &data.features()[i];
                let probs = softmax(&model.scores(x));
                for (k, row) in model.rows.iter_mut().enumerate() {
                    let target = if data.labels()[i] == k { 1.0 } else { 0.0 };
                    let gradient = probs[k] - target;
                    for (w, xi) in row.weights.iter_mut().zip(x) {
                        *w -= self.learning_rate * (gradient * xi + self.l2 * *w);
                    }
                    row.bias -= self.learning_rate * gradient;
                }
            }
        }

        if !model.is_finite() {
            return Err(AutoMLError::ConvergenceFailure {
                iterations: self.epochs,
            });
        }
        Ok(model)
    }
}
