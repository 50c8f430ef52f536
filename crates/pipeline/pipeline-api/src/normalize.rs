//! Min-max normalize step

use pipeline_spi::{PipelineError, PipelineStep, Result};
use serde::{Deserialize, Serialize};

/// Normalize each feature to the [0, 1] range seen during `fit`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMaxNormalizer {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl MinMaxNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(&self) -> &[f64] {
        &self.min
    }

    pub fn max(&self) -> &[f64] {
        &self.max
    }

    pub fn is_fitted(&self) -> bool {
        !self.min.is_empty()
    }

    fn check_width(&self, row: &[f64]) -> Result<()> {
        if !self.is_fitted() {
            return Err(PipelineError::NotFitted(self.name().to_string()));
        }
        if row.len() != self.min.len() {
            return Err(PipelineError::DimensionMismatch {
                expected: self.min.len(),
                actual: row.len(),
            });
        }
        Ok(())
    }
}

impl PipelineStep for MinMaxNormalizer {
    fn fit(&mut self, rows: &[Vec<f64>]) -> Result<()> {
        let first = rows.first().ok_or(PipelineError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
        let width = first.len();

        let mut min = vec![f64::INFINITY; width];
        let mut max = vec![f64::NEG_INFINITY; width];
        for row in rows {
            if row.len() != width {
                return Err(PipelineError::DimensionMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            for (j, &x) in row.iter().enumerate() {
                min[j] = min[j].min(x);
                max[j] = max[j].max(x);
            }
        }

        self.min = min;
        self.max = max;
        Ok(())
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.check_width(row)?;
        Ok(row
            .iter()
            .enumerate()
            .map(|(j, &x)| {
                let range = self.max[j] - self.min[j];
                if range == 0.0 {
                    0.5
                } else {
                    (x - self.min[j]) / range
                }
            })
            .collect())
    }

    fn name(&self) -> &str {
        "normalize_min_max"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<f64>> {
        vec![vec![0.0, 10.0, 5.0], vec![10.0, 20.0, 5.0], vec![5.0, 15.0, 5.0]]
    }

    #[test]
    fn test_fit_transform_range() {
        let mut step = MinMaxNormalizer::new();
        step.fit(&rows()).unwrap();

        assert_eq!(step.transform(&[0.0, 10.0, 5.0]).unwrap(), vec![0.0, 0.0, 0.5]);
        assert_eq!(step.transform(&[10.0, 20.0, 5.0]).unwrap(), vec![1.0, 1.0, 0.5]);
        assert_eq!(step.transform(&[5.0, 15.0, 5.0]).unwrap(), vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_values_outside_fitted_range_are_not_clamped() {
        let mut step = MinMaxNormalizer::new();
        step.fit(&rows()).unwrap();
        let out = step.transform(&[20.0, 0.0, 5.0]).unwrap();
        assert!((out[0] - 2.0).abs() < 1e-12);
        assert!((out[1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unfitted_and_width_errors() {
        let step = MinMaxNormalizer::new();
        assert!(matches!(
            step.transform(&[1.0]),
            Err(PipelineError::NotFitted(_))
        ));

        let mut step = MinMaxNormalizer::new();
        step.fit(&rows()).unwrap();
        assert!(matches!(
            step.transform(&[1.0, 2.0]),
            Err(PipelineError::DimensionMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_fit_empty() {
        let mut step = MinMaxNormalizer::new();
        assert!(step.fit(&[]).is_err());
    }
}
