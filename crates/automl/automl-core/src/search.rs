//! Candidate search over the trainer catalogue

use automl_spi::{SearchStrategy, TrainerKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const EPOCH_CHOICES: [usize; 4] = [5, 10, 20, 50];

/// Yields every catalogue default first, then seeded random samples of the
/// tunable trainers, up to `max_trials` candidates in total.
#[derive(Debug, Clone)]
pub struct RandomSearch {
    defaults: Vec<TrainerKind>,
    tunable: Vec<TrainerKind>,
    rng: StdRng,
    max_trials: usize,
    issued: usize,
}

impl RandomSearch {
    pub fn new(max_trials: usize, seed: u64) -> Self {
        let catalogue = TrainerKind::catalogue();
        Self {
            defaults: catalogue.to_vec(),
            tunable: catalogue.iter().copied().filter(TrainerKind::is_tunable).collect(),
            rng: StdRng::seed_from_u64(seed),
            max_trials,
            issued: 0,
        }
    }

    pub fn issued(&self) -> usize {
        self.issued
    }

    fn log_uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low.ln()..high.ln()).exp().clamp(low, high)
    }

    fn epochs(&mut self) -> usize {
        *EPOCH_CHOICES.choose(&mut self.rng).unwrap_or(&10)
    }

    fn sample(&mut self) -> Option<TrainerKind> {
        let base = *self.tunable.choose(&mut self.rng)?;
        let kind = match base {
            TrainerKind::AveragedPerceptronOva { .. } => TrainerKind::AveragedPerceptronOva {
                learning_rate: self.log_uniform(0.01, 1.0),
                epochs: self.epochs(),
            },
            TrainerKind::LinearSvmOva { .. } => TrainerKind::LinearSvmOva {
                learning_rate: self.log_uniform(0.01, 1.0),
                lambda: self.log_uniform(1e-6, 1e-2),
                epochs: self.epochs(),
            },
            TrainerKind::LogisticRegressionOva { .. } => TrainerKind::LogisticRegressionOva {
                learning_rate: self.log_uniform(0.01, 1.0),
                l2: self.log_uniform(1e-6, 1e-2),
                epochs: self.epochs(),
            },
            TrainerKind::MaximumEntropy { .. } => TrainerKind::MaximumEntropy {
                learning_rate: self.log_uniform(0.01, 1.0),
                l2: self.log_uniform(1e-6, 1e-2),
                epochs: self.epochs(),
            },
            TrainerKind::NaiveBayes => TrainerKind::NaiveBayes,
        };
        Some(kind)
    }
}

impl SearchStrategy for RandomSearch {
    fn next_candidate(&mut self) -> Option<TrainerKind> {
        if self.issued >= self.max_trials {
            return None;
        }
        let candidate = match self.defaults.get(self.issued) {
            Some(kind) => Some(*kind),
            None => self.sample(),
        }?;
        self.issued += 1;
        Some(candidate)
    }
}
