//! Summary statistics over per-fold metric values.

/// z-value of the two-sided 95% normal interval.
const Z_95: f64 = 1.96;

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divides by `n - 1`); `None` when `n <= 1`.
pub fn standard_deviation(values: &[f64]) -> Option<f64> {
    if values.len() <= 1 {
        return None;
    }
    let avg = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

/// Half-width `1.96 * sd / sqrt(n - 1)`; `None` when `n <= 1`.
pub fn confidence_interval_95(values: &[f64]) -> Option<f64> {
    let sd = standard_deviation(values)?;
    Some(Z_95 * sd / ((values.len() - 1) as f64).sqrt())
}

/// Mean, spread and 95% interval of one metric across folds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldStatistic {
    pub mean: f64,
    pub std_dev: f64,
    pub confidence_interval_95: f64,
}

impl FoldStatistic {
    /// `None` unless there are at least two values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Some(Self {
            mean: mean(values)?,
            std_dev: standard_deviation(values)?,
            confidence_interval_95: confidence_interval_95(values)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn test_standard_deviation() {
        let sd = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.138_089_935).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(standard_deviation(&[]), None);
        assert_eq!(standard_deviation(&[1.0]), None);
        assert_eq!(confidence_interval_95(&[1.0]), None);
        assert_eq!(FoldStatistic::from_values(&[0.5]), None);
    }

    #[test]
    fn test_zero_spread_iff_equal() {
        assert_eq!(standard_deviation(&[0.5, 0.5, 0.5]), Some(0.0));
        assert!(standard_deviation(&[0.5, 0.5, 0.75]).unwrap() > 0.0);
    }

    #[test]
    fn test_interval_grows_with_spread() {
        let narrow = confidence_interval_95(&[0.9, 0.91, 0.92]).unwrap();
        let wide = confidence_interval_95(&[0.7, 0.9, 1.0]).unwrap();
        assert!(wide > narrow);
    }

    #[test]
    fn test_interval_value() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sd = standard_deviation(&values).unwrap();
        let ci = confidence_interval_95(&values).unwrap();
        assert!((ci - 1.96 * sd / 2.0).abs() < 1e-12);

        let stat = FoldStatistic::from_values(&values).unwrap();
        assert_eq!(stat.mean, 3.0);
        assert_eq!(stat.std_dev, sd);
    }
}
