//! Manual training path: one fixed pipeline and trainer.

use std::io::Write;
use std::path::Path;

use automl::{cross_validate, MetricSet, PipelineBuilder, TrainerKind};
use data_spi::DatasetLoader;

use crate::context::ModelContext;
use crate::error::{Result, TrainingError};
use crate::outcome::{load_dataset, persist, TrainingOutcome};
use crate::report::{log_write_error, Color, ReportPrinter};

/// Fits `map_value_to_key(Label) -> concatenate(Temperature, Luminosity,
/// Infrared) -> normalize_min_max -> trainer`.
pub struct ManualTrainer<'a, W: Write> {
    loader: &'a dyn DatasetLoader,
    printer: &'a mut ReportPrinter<W>,
    trainer: TrainerKind,
    context: ModelContext,
}

impl<'a, W: Write> ManualTrainer<'a, W> {
    pub fn new(loader: &'a dyn DatasetLoader, printer: &'a mut ReportPrinter<W>) -> Self {
        Self {
            loader,
            printer,
            trainer: TrainerKind::default(),
            context: ModelContext::default(),
        }
    }

    pub fn with_trainer(mut self, trainer: TrainerKind) -> Self {
        self.trainer = trainer;
        self
    }

    pub fn with_context(mut self, context: ModelContext) -> Self {
        self.context = context;
        self
    }

    fn pipeline(&self) -> PipelineBuilder {
        PipelineBuilder::sensor_default(self.trainer)
    }

    fn fit_error(&self, source: automl::AutoMLError) -> TrainingError {
        TrainingError::Fit {
            trainer: self.trainer.to_string(),
            source,
        }
    }

    /// Fit on `training`, score on `testing`, save to `model_path`.
    pub fn train(&mut self, training: &Path, testing: &Path, model_path: &Path) -> Result<TrainingOutcome> {
        let training_data = load_dataset(self.loader, training)?;
        let testing_data = load_dataset(self.loader, testing)?;

        let trainer_name = self.trainer.name().to_string();
        log_write_error(
            self.printer
                .write_line_color(&format!("\nTRAINING USING: {}", trainer_name), Color::Cyan),
        );

        let model = self
            .pipeline()
            .fit(&training_data, self.context.seed())
            .map_err(|e| self.fit_error(e))?;
        tracing::info!(trainer = %self.trainer, "pipeline fitted");

        let metrics = model
            .evaluate(&testing_data)
            .map_err(TrainingError::Evaluation)?;
        log_write_error(self.printer.print_metrics(&trainer_name, &metrics));

        persist(&model, &training_data, model_path)?;

        Ok(TrainingOutcome {
            trainer_name,
            model,
            metrics,
        })
    }

    /// k-fold cross-validation of the pipeline on `training`; prints the
    /// fold averages and returns the per-fold metrics.
    pub fn cross_validate(&mut self, training: &Path, folds: usize) -> Result<Vec<MetricSet>> {
        let training_data = load_dataset(self.loader, training)?;

        log_write_error(self.printer.write_line_color(
            &format!(
                "\nCROSS-VALIDATING: {} ({} folds)",
                self.trainer.name(),
                folds
            ),
            Color::Cyan,
        ));

        let results = cross_validate(&self.pipeline(), &training_data, folds, self.context.seed())
            .map_err(|e| self.fit_error(e))?;
        let metrics: Vec<MetricSet> = results.iter().map(|r| r.metrics).collect();
        log_write_error(self.printer.print_fold_average_metrics(&metrics));
        Ok(metrics)
    }
}
