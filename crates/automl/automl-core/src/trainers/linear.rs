//! Linear score functions shared by the linear trainers.

use automl_spi::Classifier;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// `w · x + b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearBinary {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearBinary {
    pub fn zeros(width: usize) -> Self {
        Self {
            weights: vec![0.0; width],
            bias: 0.0,
        }
    }

    pub fn score(&self, x: &[f64]) -> f64 {
        dot(&self.weights, x) + self.bias
    }

    pub fn is_finite(&self) -> bool {
        self.bias.is_finite() && self.weights.iter().all(|w| w.is_finite())
    }
}

/// How per-class scores become probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calibration {
    /// Softmax over raw scores
    Softmax,
    /// Independent sigmoids, renormalized
    Sigmoid,
}

/// One linear score function per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub rows: Vec<LinearBinary>,
    pub calibration: Calibration,
}

impl LinearModel {
    pub fn scores(&self, x: &[f64]) -> Vec<f64> {
        self.rows.iter().map(|r| r.score(x)).collect()
    }

    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(LinearBinary::is_finite)
    }
}

impl Classifier for LinearModel {
    fn num_classes(&self) -> usize {
        self.rows.len()
    }

    fn probabilities(&self, features: &[f64]) -> Vec<f64> {
        let scores = self.scores(features);
        match self.calibration {
            Calibration::Softmax => softmax(&scores),
            Calibration::Sigmoid => {
                let sig: Vec<f64> = scores.iter().map(|&s| sigmoid(s)).collect();
                let total: f64 = sig.iter().sum();
                // NaN propagates; an all-zero total falls back to uniform.
                if total > 0.0 || total.is_nan() {
                    sig.iter().map(|p| p / total).collect()
                } else {
                    vec![1.0 / sig.len() as f64; sig.len()]
                }
            }
        }
    }
}

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Numerically stable softmax.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}

/// One-versus-all: fit one binary score function per class with targets ±1.
pub fn fit_one_versus_all<F>(
    features: &[Vec<f64>],
    labels: &[usize],
    num_classes: usize,
    seed: u64,
    fit_binary: F,
) -> Vec<LinearBinary>
where
    F: Fn(&[Vec<f64>], &[f64], u64) -> LinearBinary,
{
    (0..num_classes)
        .map(|k| {
            let targets: Vec<f64> = labels
                .iter()
                .map(|&l| if l == k { 1.0 } else { -1.0 })
                .collect();
            fit_binary(features, &targets, seed.wrapping_add(k as u64))
        })
        .collect()
}

/// Epoch visit orders, reshuffled every epoch from one seeded stream.
pub struct EpochOrder {
    order: Vec<usize>,
    rng: StdRng,
}

impl EpochOrder {
    pub fn new(n: usize, seed: u64) -> Self {
        Self {
            order: (0..n).collect(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_epoch(&mut self) -> &[usize] {
        self.order.shuffle(&mut self.rng);
        &self.order
    }
}
