//! Trainer and classifier traits.

use crate::error::AutoMLError;
use crate::model::TrainingData;

/// Result type for trainer operations.
pub type Result<T> = std::result::Result<T, AutoMLError>;

/// A fitted multiclass model over normalized feature rows.
pub trait Classifier: Send + Sync {
    /// Number of classes the model scores.
    fn num_classes(&self) -> usize;

    /// Class probabilities for one row; sums to 1.
    fn probabilities(&self, features: &[f64]) -> Vec<f64>;

    /// Key of the most probable class (lowest key on ties).
    fn predict(&self, features: &[f64]) -> usize {
        let probs = self.probabilities(features);
        let mut best = 0;
        for (k, &p) in probs.iter().enumerate() {
            if p > probs[best] {
                best = k;
            }
        }
        best
    }
}

/// A fitting strategy producing a [`Classifier`].
pub trait Trainer {
    type Model: Classifier;

    /// Display name used in reports.
    fn name(&self) -> &'static str;

    /// Fit a model. `seed` drives any shuffling so fits are reproducible.
    fn fit(&self, data: &TrainingData, seed: u64) -> Result<Self::Model>;
}
