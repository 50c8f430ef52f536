//! Trained model artifact and the pipeline that produces it

use automl_spi::{AutoMLError, Classifier, MetricSet, Result, TrainerKind, TrainingData};
use data_spi::{ColumnKind, Dataset, Schema, SensorSample, INFRARED, LABEL, LUMINOSITY, TEMPERATURE};
use pipeline_api::{Concatenate, LabelKeyMap, MinMaxNormalizer, PipelineStep};
use serde::{Deserialize, Serialize};

use crate::metrics::MulticlassEvaluator;
use crate::trainers::{fit_classifier, ClassifierModel};

/// Name of the concatenated feature column.
pub const FEATURES: &str = "Features";

/// Predicted label plus the per-class probabilities, indexed by label key.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub scores: Vec<f64>,
}

/// A fitted featurizer and classifier, ready to score samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    trainer: TrainerKind,
    schema: Schema,
    labels: LabelKeyMap,
    features: Concatenate,
    normalizer: Option<MinMaxNormalizer>,
    classifier: ClassifierModel,
}

impl TrainedModel {
    pub fn trainer(&self) -> &TrainerKind {
        &self.trainer
    }

    /// Schema of the data the model was trained on.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn labels(&self) -> &LabelKeyMap {
        &self.labels
    }

    pub fn classifier(&self) -> &ClassifierModel {
        &self.classifier
    }

    pub fn featurize(&self, sample: &SensorSample) -> Result<Vec<f64>> {
        let row = self.features.apply(sample)?;
        match &self.normalizer {
            Some(n) => Ok(n.transform(&row)?),
            None => Ok(row),
        }
    }

    /// Class probabilities and the winning label for one sample.
    ///
    /// Fails with `NumericalError` when any probability is not finite, such as
    /// for NaN or extreme readings.
    pub fn score(&self, sample: &SensorSample) -> Result<Prediction> {
        let row = self.featurize(sample)?;
        let scores = self.classifier.probabilities(&row);
        if scores.iter().any(|p| !p.is_finite()) {
            return Err(AutoMLError::NumericalError(format!(
                "non-finite class probabilities for features {:?}",
                row
            )));
        }
        let key = self.classifier.predict(&row);
        let label = self
            .labels
            .value(key)
            .ok_or_else(|| AutoMLError::NumericalError(format!("predicted unknown key {}", key)))?
            .to_string();
        Ok(Prediction { label, scores })
    }

    pub fn predict(&self, sample: &SensorSample) -> Result<String> {
        self.score(sample).map(|p| p.label)
    }

    /// Score every labeled sample of `data` and compute multiclass metrics.
    pub fn evaluate(&self, data: &Dataset) -> Result<MetricSet> {
        let mut evaluator = MulticlassEvaluator::new();
        for sample in data.samples().iter().filter(|s| s.is_labeled()) {
            let prediction = self.score(sample)?;
            let p_true = self
                .labels
                .key(&sample.label)
                .and_then(|k| prediction.scores.get(k).copied());
            evaluator.add(&sample.label, &prediction.label, p_true);
        }
        evaluator.finish()
    }
}

/// Builds the fixed featurization pipeline followed by one trainer.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    label: Option<String>,
    features: Option<Concatenate>,
    normalize: bool,
    trainer: Option<TrainerKind>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `map_value_to_key(Label) -> concatenate(Temperature, Luminosity, Infrared) -> normalize_min_max -> trainer`
    pub fn sensor_default(trainer: TrainerKind) -> Self {
        Self::new()
            .map_value_to_key(LABEL)
            .concatenate(FEATURES, [TEMPERATURE, LUMINOSITY, INFRARED])
            .normalize_min_max()
            .append(trainer)
    }

    pub fn map_value_to_key(mut self, column: impl Into<String>) -> Self {
        self.label = Some(column.into());
        self
    }

    pub fn concatenate<S: Into<String>>(
        mut self,
        output: impl Into<String>,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.features = Some(Concatenate::new(output, columns));
        self
    }

    pub fn normalize_min_max(mut self) -> Self {
        self.normalize = true;
        self
    }

    pub fn append(mut self, trainer: TrainerKind) -> Self {
        self.trainer = Some(trainer);
        self
    }

    pub fn trainer(&self) -> Option<&TrainerKind> {
        self.trainer.as_ref()
    }

    pub fn fit(&self, data: &Dataset, seed: u64) -> Result<TrainedModel> {
        let trainer = self.trainer.ok_or_else(|| missing_step("trainer"))?;
        let features = self.features.clone().ok_or_else(|| missing_step("concatenate"))?;
        let label = self.label.as_deref().ok_or_else(|| missing_step("map_value_to_key"))?;

        let schema = data.schema();
        match schema.column(label) {
            Some(column) if column.kind == ColumnKind::Text && label == LABEL => {}
            _ => {
                return Err(AutoMLError::InvalidParameter {
                    name: label.to_string(),
                    reason: format!("not a text label column of {}", schema),
                })
            }
        }
        features.validate(schema)?;

        if data.is_empty() {
            return Err(AutoMLError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if let Some(pos) = data.samples().iter().position(|s| !s.is_labeled()) {
            return Err(AutoMLError::InvalidParameter {
                name: label.to_string(),
                reason: format!("row {} has no label", pos + 1),
            });
        }

        let labels = LabelKeyMap::fit(data.samples().iter().map(|s| s.label.as_str()));
        let keys = data
            .samples()
            .iter()
            .map(|s| labels.key(&s.label).unwrap_or_default())
            .collect();

        let mut rows = data
            .samples()
            .iter()
            .map(|s| features.apply(s))
            .collect::<pipeline_api::Result<Vec<_>>>()?;

        let normalizer = if self.normalize {
            let mut normalizer = MinMaxNormalizer::new();
            normalizer.fit(&rows)?;
            rows = rows
                .iter()
                .map(|r| normalizer.transform(r))
                .collect::<pipeline_api::Result<Vec<_>>>()?;
            Some(normalizer)
        } else {
            None
        };

        let training = TrainingData::new(rows, keys, labels.len())?;
        let classifier = fit_classifier(&trainer, &training, seed)?;

        Ok(TrainedModel {
            trainer,
            schema: schema.clone(),
            labels,
            features,
            normalizer,
            classifier,
        })
    }
}

fn missing_step(step: &str) -> AutoMLError {
    AutoMLError::InvalidParameter {
        name: step.to_string(),
        reason: "pipeline step is missing".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::separable;

    #[test]
    fn test_default_pipeline_fits_and_predicts() {
        let data = separable(10);
        let model = PipelineBuilder::sensor_default(TrainerKind::default())
            .fit(&data, 1)
            .unwrap();

        assert_eq!(model.labels().values(), ["Day", "Lamp", "Dark"]);
        assert_eq!(
            model.predict(&SensorSample::unlabeled(905.0, 20.5, 5.5)).unwrap(),
            "Day"
        );
        assert_eq!(
            model.predict(&SensorSample::unlabeled(3.0, 18.0, 1.0)).unwrap(),
            "Dark"
        );
    }

    #[test]
    fn test_evaluate_on_training_data() {
        let data = separable(10);
        let model = PipelineBuilder::sensor_default(TrainerKind::NaiveBayes)
            .fit(&data, 1)
            .unwrap();
        let metrics = model.evaluate(&data).unwrap();
        assert_eq!(metrics.micro_accuracy, 1.0);
        assert_eq!(metrics.macro_accuracy, 1.0);
        assert!(metrics.log_loss < 0.1);
    }

    #[test]
    fn test_non_finite_reading_is_rejected() {
        let model = PipelineBuilder::sensor_default(TrainerKind::default())
            .fit(&separable(10), 1)
            .unwrap();
        let err = model
            .predict(&SensorSample::unlabeled(f32::NAN, 20.0, 5.0))
            .unwrap_err();
        assert!(matches!(err, AutoMLError::NumericalError(_)));
    }

    #[test]
    fn test_scores_form_distribution() {
        let model = PipelineBuilder::sensor_default(TrainerKind::maximum_entropy())
            .fit(&separable(5), 1)
            .unwrap();
        let prediction = model.score(&SensorSample::unlabeled(500.0, 25.0, 30.0)).unwrap();
        assert_eq!(prediction.scores.len(), 3);
        assert!((prediction.scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_label_rejected() {
        let data = Dataset::new(
            Schema::sensor(),
            vec![
                SensorSample::new(1.0, 2.0, 3.0, "Only"),
                SensorSample::new(2.0, 3.0, 4.0, "Only"),
            ],
        );
        let err = PipelineBuilder::sensor_default(TrainerKind::default())
            .fit(&data, 1)
            .unwrap_err();
        assert!(matches!(err, AutoMLError::InsufficientClasses { actual: 1 }));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let data = Dataset::new(Schema::sensor(), Vec::new());
        let err = PipelineBuilder::sensor_default(TrainerKind::default())
            .fit(&data, 1)
            .unwrap_err();
        assert!(matches!(err, AutoMLError::InsufficientData { .. }));
    }

    #[test]
    fn test_missing_steps_rejected() {
        let err = PipelineBuilder::new()
            .map_value_to_key(LABEL)
            .append(TrainerKind::NaiveBayes)
            .fit(&separable(3), 1)
            .unwrap_err();
        assert!(matches!(err, AutoMLError::InvalidParameter { .. }));
    }

    #[test]
    fn test_unknown_feature_column_rejected() {
        let err = PipelineBuilder::new()
            .map_value_to_key(LABEL)
            .concatenate(FEATURES, ["Humidity"])
            .append(TrainerKind::NaiveBayes)
            .fit(&separable(3), 1)
            .unwrap_err();
        assert!(matches!(err, AutoMLError::Pipeline(_)));
    }
}
