//! AutoML training path: search, select, evaluate, persist.

use std::io::Write;
use std::path::Path;

use automl::{AutoML, AutoMLConfig, ModelSelector, OptimizationMetric, RunDetail, TrainedModel};
use data_spi::DatasetLoader;

use crate::error::{Result, TrainingError};
use crate::outcome::{load_dataset, persist, TrainingOutcome};
use crate::progress::ProgressReporter;
use crate::report::{log_write_error, Color, ReportPrinter};

/// Where an auto-train run is, or where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Loading,
    Searching,
    Selecting,
    Evaluating,
    Persisted,
    Failed,
}

/// Runs one time-boxed AutoML experiment end to end.
pub struct AutoTrainer<'a, W: Write> {
    loader: &'a dyn DatasetLoader,
    printer: &'a mut ReportPrinter<W>,
    top_runs: usize,
    stage: Stage,
}

impl<'a, W: Write> AutoTrainer<'a, W> {
    pub fn new(loader: &'a dyn DatasetLoader, printer: &'a mut ReportPrinter<W>) -> Self {
        Self {
            loader,
            printer,
            top_runs: 3,
            stage: Stage::Idle,
        }
    }

    pub fn with_top_runs(mut self, k: usize) -> Self {
        self.top_runs = k;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Search for the best trainer on `training`, score it on `testing` and
    /// save it to `model_path`.
    ///
    /// `config.metric` is the primary metric used to pick the winner and
    /// `config.time_budget_secs` bounds the search.
    pub fn auto_train(
        &mut self,
        training: &Path,
        testing: &Path,
        model_path: &Path,
        config: &AutoMLConfig,
    ) -> Result<TrainingOutcome> {
        let result = self.run(training, testing, model_path, config);
        if let Err(e) = &result {
            tracing::error!(stage = ?self.stage, error = %e, "auto-train failed");
            self.stage = Stage::Failed;
        }
        result
    }

    fn enter(&mut self, stage: Stage) {
        tracing::info!(?stage, "auto-train stage");
        self.stage = stage;
    }

    fn run(
        &mut self,
        training: &Path,
        testing: &Path,
        model_path: &Path,
        config: &AutoMLConfig,
    ) -> Result<TrainingOutcome> {
        self.enter(Stage::Loading);
        let training_data = load_dataset(self.loader, training)?;
        let testing_data = load_dataset(self.loader, testing)?;

        self.enter(Stage::Searching);
        log_write_error(self.printer.write_line_color(
            &format!(
                "\nAutoML multiclass classification experiment for {} seconds...",
                config.time_budget_secs
            ),
            Color::Yellow,
        ));
        let experiment = {
            let mut reporter = ProgressReporter::new(&mut *self.printer);
            AutoML::new(config.clone())
                .execute(&training_data, &mut |trial| reporter.report(trial))
                .map_err(|e| TrainingError::NoViableModel(e.to_string()))?
        };

        self.enter(Stage::Selecting);
        let metric = config.metric;
        let chosen = select_best(&experiment.runs, metric).ok_or_else(|| {
            TrainingError::NoViableModel(format!(
                "none of {} trials produced a usable {}",
                experiment.len(),
                metric
            ))
        })?;
        if let Some(library_best) = experiment.best_run() {
            if !std::ptr::eq(library_best, &experiment.runs[chosen]) {
                tracing::warn!(
                    selected = %experiment.runs[chosen].trial.trainer,
                    library = %library_best.trial.trainer,
                    "experiment ranking differs from {} ranking",
                    metric
                );
            }
        }

        let trials: Vec<_> = experiment.trials().cloned().collect();
        log_write_error(
            self.printer
                .write_line_color(&format!("\nTop Trainer (by {})", metric), Color::Yellow),
        );
        log_write_error(self.printer.print_top_runs(&trials, metric, self.top_runs));

        let trainer_name = trials[chosen].trainer_name.clone();
        log_write_error(
            self.printer
                .write_line_color(&format!("\nTRAINING USING: {}", trainer_name), Color::Cyan),
        );
        let model = experiment
            .runs
            .into_iter()
            .nth(chosen)
            .and_then(|run| run.model)
            .ok_or_else(|| TrainingError::NoViableModel(format!("{} kept no model", trainer_name)))?;

        self.enter(Stage::Evaluating);
        let metrics = model
            .evaluate(&testing_data)
            .map_err(TrainingError::Evaluation)?;
        log_write_error(self.printer.print_metrics(&trainer_name, &metrics));

        persist(&model, &training_data, model_path)?;
        self.enter(Stage::Persisted);

        Ok(TrainingOutcome {
            trainer_name,
            model,
            metrics,
        })
    }
}

/// Index of the best run that kept a model, ranked by `metric`.
///
/// NaN and failed runs never win; among equal values the earliest run wins.
pub fn select_best(runs: &[RunDetail<TrainedModel>], metric: OptimizationMetric) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, run) in runs.iter().enumerate() {
        if run.model.is_none() || !run.trial.is_viable(metric) {
            continue;
        }
        let Some(value) = run.trial.metric(metric) else {
            continue;
        };
        match best {
            Some((_, incumbent)) if !metric.is_better(value, incumbent) => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}
