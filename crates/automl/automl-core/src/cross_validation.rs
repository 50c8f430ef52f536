//! k-fold cross-validation of a pipeline

use automl_spi::{AutoMLError, MetricSet, Result};
use data_spi::Dataset;
use rayon::prelude::*;

use crate::model::{PipelineBuilder, TrainedModel};
use crate::split::k_fold_indices;

/// Outcome of one fold.
#[derive(Debug, Clone)]
pub struct CrossValidationResult {
    /// Zero-based fold index
    pub fold: usize,
    pub metrics: MetricSet,
    pub model: TrainedModel,
}

/// Fit and evaluate `pipeline` on `folds` folds of `data`, in parallel.
///
/// Results come back in fold order. Any fold failure fails the whole run.
pub fn cross_validate(
    pipeline: &PipelineBuilder,
    data: &Dataset,
    folds: usize,
    seed: u64,
) -> Result<Vec<CrossValidationResult>> {
    if folds < 2 {
        return Err(AutoMLError::InvalidParameter {
            name: "folds".to_string(),
            reason: format!("need at least 2 folds, got {}", folds),
        });
    }
    if data.len() < folds {
        return Err(AutoMLError::InsufficientData {
            required: folds,
            actual: data.len(),
        });
    }

    tracing::info!(folds, rows = data.len(), "cross-validating");

    k_fold_indices(data.len(), folds, seed)
        .into_par_iter()
        .enumerate()
        .map(|(fold, (train_idx, test_idx))| {
            let model = pipeline.fit(&data.subset(&train_idx), seed)?;
            let metrics = model.evaluate(&data.subset(&test_idx))?;
            tracing::debug!(fold, micro_accuracy = metrics.micro_accuracy, "fold evaluated");
            Ok(CrossValidationResult {
                fold,
                metrics,
                model,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::separable;
    use automl_spi::TrainerKind;

    #[test]
    fn test_folds_in_order() {
        let pipeline = PipelineBuilder::sensor_default(TrainerKind::NaiveBayes);
        let results = cross_validate(&pipeline, &separable(10), 5, 1).unwrap();
        assert_eq!(results.len(), 5);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.fold, i);
            assert!(r.metrics.micro_accuracy > 0.9);
        }
    }

    #[test]
    fn test_rejects_too_few_folds() {
        let pipeline = PipelineBuilder::sensor_default(TrainerKind::NaiveBayes);
        assert!(cross_validate(&pipeline, &separable(10), 1, 1).is_err());
    }

    #[test]
    fn test_rejects_more_folds_than_rows() {
        let pipeline = PipelineBuilder::sensor_default(TrainerKind::NaiveBayes);
        let err = cross_validate(&pipeline, &separable(1), 5, 1).unwrap_err();
        assert!(matches!(err, AutoMLError::InsufficientData { .. }));
    }
}
