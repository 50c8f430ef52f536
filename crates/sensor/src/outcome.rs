//! Steps shared by both training paths.

use std::path::Path;

use automl::{archive, MetricSet, TrainedModel};
use data_spi::{Dataset, DatasetLoader};

use crate::error::{Result, TrainingError};

/// A fitted, evaluated and persisted model.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub trainer_name: String,
    pub model: TrainedModel,
    /// Metrics on the held-out test set
    pub metrics: MetricSet,
}

pub(crate) fn load_dataset(loader: &dyn DatasetLoader, path: &Path) -> Result<Dataset> {
    let data = loader.load(path)?;
    tracing::info!(path = %path.display(), rows = data.len(), loader = loader.name(), "dataset loaded");
    Ok(data)
}

/// Save the model with the schema of the data it was trained on.
pub(crate) fn persist(model: &TrainedModel, training: &Dataset, path: &Path) -> Result<()> {
    archive::save(model, training.schema(), path).map_err(TrainingError::Persistence)
}
