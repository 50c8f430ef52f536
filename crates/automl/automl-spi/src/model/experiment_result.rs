//! Experiment result types for AutoML.

use super::{OptimizationMetric, TrialResult};

/// A trial together with the model it produced, if any.
#[derive(Debug, Clone)]
pub struct RunDetail<M> {
    pub trial: TrialResult,
    pub model: Option<M>,
}

/// All runs of one experiment, in completion order.
#[derive(Debug, Clone)]
pub struct ExperimentResult<M> {
    /// Metric the experiment was configured to optimize.
    pub metric: OptimizationMetric,
    pub runs: Vec<RunDetail<M>>,
}

impl<M> ExperimentResult<M> {
    pub fn new(metric: OptimizationMetric) -> Self {
        Self {
            metric,
            runs: Vec::new(),
        }
    }

    pub fn trials(&self) -> impl Iterator<Item = &TrialResult> {
        self.runs.iter().map(|r| &r.trial)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Best viable run by the experiment's own metric.
    ///
    /// Among equal values the latest run wins; callers that need a different
    /// tie-break must rank the trials themselves.
    pub fn best_run(&self) -> Option<&RunDetail<M>> {
        let metric = self.metric;
        self.runs
            .iter()
            .filter(|r| r.model.is_some() && r.trial.is_viable(metric))
            .max_by(|a, b| {
                let a = a.trial.metric(metric).unwrap_or(f64::NAN);
                let b = b.trial.metric(metric).unwrap_or(f64::NAN);
                metric.best_first(b, a)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutoMLError;
    use crate::model::{MetricSet, TrainerKind};

    fn run(micro: f64, log_loss: f64) -> RunDetail<u32> {
        RunDetail {
            trial: TrialResult::succeeded(
                TrainerKind::NaiveBayes,
                MetricSet {
                    micro_accuracy: micro,
                    macro_accuracy: micro,
                    log_loss,
                    log_loss_reduction: 0.0,
                },
                0.0,
            ),
            model: Some(0),
        }
    }

    #[test]
    fn test_best_run_by_accuracy() {
        let mut result = ExperimentResult::new(OptimizationMetric::MicroAccuracy);
        result.runs.push(run(0.7, 0.9));
        result.runs.push(run(0.95, 0.4));
        result.runs.push(run(f64::NAN, 0.1));
        let best = result.best_run().unwrap();
        assert_eq!(best.trial.metric(OptimizationMetric::MicroAccuracy), Some(0.95));
    }

    #[test]
    fn test_best_run_lower_is_better() {
        let mut result = ExperimentResult::new(OptimizationMetric::LogLoss);
        result.runs.push(run(0.7, 0.9));
        result.runs.push(run(0.95, 0.4));
        let best = result.best_run().unwrap();
        assert_eq!(best.trial.metric(OptimizationMetric::LogLoss), Some(0.4));
    }

    #[test]
    fn test_best_run_tie_takes_latest() {
        let mut result = ExperimentResult::new(OptimizationMetric::MicroAccuracy);
        result.runs.push(run(0.9, 0.5));
        let mut second = run(0.9, 0.5);
        second.model = Some(1);
        result.runs.push(second);
        assert_eq!(result.best_run().unwrap().model, Some(1));
    }

    #[test]
    fn test_best_run_none_when_all_failed() {
        let mut result: ExperimentResult<u32> =
            ExperimentResult::new(OptimizationMetric::MicroAccuracy);
        result.runs.push(RunDetail {
            trial: TrialResult::failed(
                TrainerKind::NaiveBayes,
                AutoMLError::NumericalError("x".to_string()),
                0.0,
            ),
            model: None,
        });
        assert!(result.best_run().is_none());
    }
}
