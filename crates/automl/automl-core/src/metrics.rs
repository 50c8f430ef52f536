//! Multiclass evaluation metrics

use automl_spi::{AutoMLError, MetricSet, Result};

/// Probability floor used for log-loss.
pub const PROBABILITY_FLOOR: f64 = 1e-15;

#[derive(Debug, Clone)]
struct ClassTally {
    label: String,
    total: usize,
    correct: usize,
}

/// Accumulates predictions and reduces them to a [`MetricSet`].
#[derive(Debug, Clone, Default)]
pub struct MulticlassEvaluator {
    classes: Vec<ClassTally>,
    total: usize,
    correct: usize,
    log_loss_sum: f64,
}

impl MulticlassEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scored row.
    ///
    /// `p_true` is the probability the model assigned to `truth`; `None` when
    /// the true label was never seen in training.
    pub fn add(&mut self, truth: &str, predicted: &str, p_true: Option<f64>) {
        let hit = truth == predicted;
        match self.classes.iter_mut().find(|c| c.label == truth) {
            Some(tally) => {
                tally.total += 1;
                tally.correct += usize::from(hit);
            }
            None => self.classes.push(ClassTally {
                label: truth.to_string(),
                total: 1,
                correct: usize::from(hit),
            }),
        }
        self.total += 1;
        self.correct += usize::from(hit);

        let p = p_true.unwrap_or(0.0);
        let p = if p.is_finite() { p } else { 0.0 };
        self.log_loss_sum += -p.max(PROBABILITY_FLOOR).ln();
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn finish(&self) -> Result<MetricSet> {
        if self.total == 0 {
            return Err(AutoMLError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        let n = self.total as f64;

        let micro_accuracy = self.correct as f64 / n;
        let macro_accuracy = self
            .classes
            .iter()
            .map(|c| c.correct as f64 / c.total as f64)
            .sum::<f64>()
            / self.classes.len() as f64;
        let log_loss = self.log_loss_sum / n;

        let prior: f64 = self
            .classes
            .iter()
            .map(|c| {
                let p = c.total as f64 / n;
                -p * p.ln()
            })
            .sum();
        let log_loss_reduction = if self.classes.len() < 2 || prior <= 0.0 {
            f64::NAN
        } else {
            (prior - log_loss) / prior
        };

        Ok(MetricSet {
            micro_accuracy,
            macro_accuracy,
            log_loss,
            log_loss_reduction,
        })
    }
}
