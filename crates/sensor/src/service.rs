//! Model service: owns the current model and serves predictions.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

use automl::{archive, MetricSet, OptimizationMetric, TrainedModel};
use data_core::CsvLoader;
use data_spi::{DatasetLoader, SensorSample};

use crate::auto_train::AutoTrainer;
use crate::config::SensorConfig;
use crate::context::ModelContext;
use crate::error::{Result, TrainingError};
use crate::manual::ManualTrainer;
use crate::outcome::TrainingOutcome;
use crate::report::ReportPrinter;

type Sink = Box<dyn Write + Send>;

/// Trains, stores and serves the light-source model.
///
/// Predictions read an `Arc` snapshot of the current model and never block
/// on training. Training runs are queued so only one is in flight; a new
/// model replaces the old one only after it has been persisted.
pub struct ModelService {
    config: SensorConfig,
    context: ModelContext,
    loader: Arc<dyn DatasetLoader>,
    output: Mutex<Sink>,
    gate: Mutex<()>,
    slot: RwLock<Option<Arc<TrainedModel>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ModelService {
    /// Service reading CSV files and reporting to stdout.
    pub fn new(config: SensorConfig) -> Self {
        Self {
            context: ModelContext::new(config.seed),
            config,
            loader: Arc::new(CsvLoader::new()),
            output: Mutex::new(Box::new(io::stdout())),
            gate: Mutex::new(()),
            slot: RwLock::new(None),
        }
    }

    pub fn with_output(mut self, output: Sink) -> Self {
        self.output = Mutex::new(output);
        self
    }

    pub fn with_loader(mut self, loader: Arc<dyn DatasetLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Snapshot of the current model.
    pub fn current_model(&self) -> Option<Arc<TrainedModel>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn has_model(&self) -> bool {
        self.current_model().is_some()
    }

    fn install(&self, model: TrainedModel) {
        let model = Arc::new(model);
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(model);
    }

    /// Predicted light source, or an empty string when no model exists.
    pub fn predict(&self, luminosity: f32, temperature: f32, infrared: f32) -> String {
        let Some(model) = self.current_model() else {
            return String::new();
        };
        match model.predict(&SensorSample::unlabeled(luminosity, temperature, infrared)) {
            Ok(label) => label,
            Err(e) => {
                tracing::warn!(error = %e, "prediction failed");
                String::new()
            }
        }
    }

    /// Fit the configured manual pipeline and make it current.
    pub fn train(&self) -> Result<MetricSet> {
        let _gate = lock(&self.gate);
        let mut output = lock(&self.output);
        let mut printer = ReportPrinter::new(&mut **output).with_color(self.config.color);

        let outcome = ManualTrainer::new(self.loader.as_ref(), &mut printer)
            .with_trainer(self.config.trainer)
            .with_context(self.context)
            .train(
                &self.config.training_csv,
                &self.config.testing_csv,
                &self.config.model_path,
            )?;
        Ok(self.finish(outcome))
    }

    /// Run an AutoML search with the configured budget and metric.
    pub fn auto_train(&self) -> Result<MetricSet> {
        self.auto_train_with(self.config.experiment_seconds, self.config.primary_metric)
    }

    pub fn auto_train_with(
        &self,
        time_budget_secs: u64,
        primary_metric: OptimizationMetric,
    ) -> Result<MetricSet> {
        let _gate = lock(&self.gate);
        let mut output = lock(&self.output);
        let mut printer = ReportPrinter::new(&mut **output).with_color(self.config.color);

        let config = SensorConfig {
            experiment_seconds: time_budget_secs,
            primary_metric,
            ..self.config.clone()
        }
        .automl();
        let outcome = AutoTrainer::new(self.loader.as_ref(), &mut printer)
            .with_top_runs(self.config.top_runs)
            .auto_train(
                &self.config.training_csv,
                &self.config.testing_csv,
                &self.config.model_path,
                &config,
            )?;
        Ok(self.finish(outcome))
    }

    /// Cross-validate the manual pipeline on the training set.
    pub fn cross_validate(&self, folds: usize) -> Result<Vec<MetricSet>> {
        let _gate = lock(&self.gate);
        let mut output = lock(&self.output);
        let mut printer = ReportPrinter::new(&mut **output).with_color(self.config.color);

        ManualTrainer::new(self.loader.as_ref(), &mut printer)
            .with_trainer(self.config.trainer)
            .with_context(self.context)
            .cross_validate(&self.config.training_csv, folds)
    }

    /// Load the persisted archive, if one exists, and make it current.
    ///
    /// Returns `false` when there is no archive to load.
    pub fn restore(&self) -> Result<bool> {
        let path = &self.config.model_path;
        if !path.exists() {
            tracing::info!(path = %path.display(), "no saved model to restore");
            return Ok(false);
        }
        let _gate = lock(&self.gate);
        let model =
            archive::load(path, self.loader.schema()).map_err(TrainingError::Persistence)?;
        self.install(model);
        Ok(true)
    }

    fn finish(&self, outcome: TrainingOutcome) -> MetricSet {
        tracing::info!(
            trainer = %outcome.trainer_name,
            micro_accuracy = outcome.metrics.micro_accuracy,
            "model replaced"
        );
        self.install(outcome.model);
        outcome.metrics
    }

    /// [`train`](Self::train) on a background thread.
    pub fn spawn_train(self: &Arc<Self>) -> io::Result<JoinHandle<Result<MetricSet>>> {
        let service = Arc::clone(self);
        thread::Builder::new()
            .name("sensor-train".to_string())
            .spawn(move || service.train())
    }

    /// [`auto_train`](Self::auto_train) on a background thread.
    pub fn spawn_auto_train(self: &Arc<Self>) -> io::Result<JoinHandle<Result<MetricSet>>> {
        let service = Arc::clone(self);
        thread::Builder::new()
            .name("sensor-auto-train".to_string())
            .spawn(move || service.auto_train())
    }
}
