//! Time-boxed AutoML experiment

use std::time::Instant;

use automl_api::AutoMLConfig;
use automl_spi::{
    AutoMLError, ExperimentResult, ModelSelector, Result, RunDetail, SearchStrategy, TrainerKind,
    TrialResult,
};
use data_spi::Dataset;

use crate::model::{PipelineBuilder, TrainedModel};
use crate::search::RandomSearch;
use crate::split::train_validation_split;

/// Automatic trainer selection for sensor classification
#[derive(Debug, Clone)]
pub struct AutoML {
    config: AutoMLConfig,
}

impl AutoML {
    /// Create AutoML with custom configuration
    pub fn new(config: AutoMLConfig) -> Self {
        Self { config }
    }

    /// Create AutoML with default configuration
    pub fn with_defaults() -> Self {
        Self::new(AutoMLConfig::default())
    }

    pub fn config(&self) -> &AutoMLConfig {
        &self.config
    }

    /// Run the experiment with a caller-supplied candidate strategy.
    ///
    /// Stops when the strategy is exhausted or when the time budget has run
    /// out before the next trial would start. A trial already running is
    /// never interrupted.
    pub fn execute_with(
        &self,
        data: &Dataset,
        strategy: &mut dyn SearchStrategy,
        progress: &mut dyn FnMut(&TrialResult),
    ) -> Result<ExperimentResult<TrainedModel>> {
        if data.len() < 2 {
            return Err(AutoMLError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }
        let classes = data.distinct_labels().len();
        if classes < 2 {
            return Err(AutoMLError::InsufficientClasses { actual: classes });
        }

        let (train_idx, validation_idx) =
            train_validation_split(data.len(), self.config.validation_ratio, self.config.seed);
        let train = data.subset(&train_idx);
        let validation = data.subset(&validation_idx);

        tracing::info!(
            train_rows = train.len(),
            validation_rows = validation.len(),
            budget_secs = self.config.time_budget_secs,
            max_trials = self.config.max_trials,
            metric = %self.config.metric,
            "starting AutoML experiment"
        );

        let deadline = Instant::now() + self.config.time_budget();
        let mut result = ExperimentResult::new(self.config.metric);

        while let Some(kind) = strategy.next_candidate() {
            if Instant::now() >= deadline {
                tracing::info!(trials = result.len(), "time budget exhausted");
                break;
            }
            let run = self.run_trial(kind, &train, &validation);
            progress(&run.trial);
            result.runs.push(run);
        }

        tracing::info!(trials = result.len(), "AutoML experiment finished");
        Ok(result)
    }

    fn run_trial(&self, kind: TrainerKind, train: &Dataset, validation: &Dataset) -> RunDetail<TrainedModel> {
        let started = Instant::now();
        let outcome = PipelineBuilder::sensor_default(kind)
            .fit(train, self.config.seed)
            .and_then(|model| model.evaluate(validation).map(|metrics| (model, metrics)));
        let runtime = started.elapsed().as_secs_f64();

        match outcome {
            Ok((model, metrics)) => {
                tracing::debug!(
                    trainer = %kind,
                    micro_accuracy = metrics.micro_accuracy,
                    runtime_secs = runtime,
                    "trial finished"
                );
                RunDetail {
                    trial: TrialResult::succeeded(kind, metrics, runtime),
                    model: Some(model),
                }
            }
            Err(e) => {
                tracing::debug!(trainer = %kind, error = %e, "trial failed");
                RunDetail {
                    trial: TrialResult::failed(kind, e, runtime),
                    model: None,
                }
            }
        }
    }
}

impl Default for AutoML {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ModelSelector for AutoML {
    type Model = TrainedModel;

    fn execute(
        &self,
        data: &Dataset,
        progress: &mut dyn FnMut(&TrialResult),
    ) -> Result<ExperimentResult<TrainedModel>> {
        let mut search = RandomSearch::new(self.config.max_trials, self.config.seed);
        self.execute_with(data, &mut search, progress)
    }
}
