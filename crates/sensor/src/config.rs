//! Service configuration from `SENSOR_*` environment variables.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use automl::{AutoMLConfig, OptimizationMetric, TrainerKind};
use serde::{Deserialize, Serialize};

/// Runtime configuration of the sensor service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    pub training_csv: PathBuf,
    pub testing_csv: PathBuf,
    pub model_path: PathBuf,
    /// AutoML time budget in seconds
    pub experiment_seconds: u64,
    pub max_trials: usize,
    pub validation_ratio: f64,
    /// Folds used by `cross-validate` when none are given
    pub cv_folds: usize,
    pub seed: u64,
    /// Trainer used by the manual pipeline
    pub trainer: TrainerKind,
    pub primary_metric: OptimizationMetric,
    /// Number of runs listed after a search
    pub top_runs: usize,
    /// Colour console reports
    pub color: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            training_csv: PathBuf::from("MachineLearning/training.csv"),
            testing_csv: PathBuf::from("MachineLearning/testing.csv"),
            model_path: PathBuf::from("MachineLearning/model.json"),
            experiment_seconds: 30,
            max_trials: 100,
            validation_ratio: 0.2,
            cv_folds: 5,
            seed: 1,
            trainer: TrainerKind::default(),
            primary_metric: OptimizationMetric::MicroAccuracy,
            top_runs: 3,
            color: true,
        }
    }
}

impl SensorConfig {
    /// Read the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unset keys keep their
    /// default; unparsable values are logged and also keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup("SENSOR_TRAINING_CSV") {
            config.training_csv = PathBuf::from(v);
        }
        if let Some(v) = lookup("SENSOR_TESTING_CSV") {
            config.testing_csv = PathBuf::from(v);
        }
        if let Some(v) = lookup("SENSOR_MODEL_PATH") {
            config.model_path = PathBuf::from(v);
        }
        parse_into(&lookup, "SENSOR_EXPERIMENT_SECONDS", &mut config.experiment_seconds);
        parse_into(&lookup, "SENSOR_MAX_TRIALS", &mut config.max_trials);
        parse_into(&lookup, "SENSOR_VALIDATION_RATIO", &mut config.validation_ratio);
        parse_into(&lookup, "SENSOR_CV_FOLDS", &mut config.cv_folds);
        parse_into(&lookup, "SENSOR_SEED", &mut config.seed);
        parse_into(&lookup, "SENSOR_TRAINER", &mut config.trainer);
        parse_into(&lookup, "SENSOR_PRIMARY_METRIC", &mut config.primary_metric);
        parse_into(&lookup, "SENSOR_TOP_RUNS", &mut config.top_runs);
        parse_into(&lookup, "SENSOR_COLOR", &mut config.color);
        config
    }

    /// Experiment settings for the AutoML search, clamped to valid ranges.
    pub fn automl(&self) -> AutoMLConfig {
        AutoMLConfig::with_metric(self.primary_metric)
            .time_budget_secs(self.experiment_seconds)
            .max_trials(self.max_trials)
            .validation_ratio(self.validation_ratio)
            .seed(self.seed)
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => *target = value,
        Err(e) => tracing::warn!(key, value = %raw, error = %e, "ignoring invalid setting"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SensorConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SensorConfig::default());
        assert_eq!(config.experiment_seconds, 30);
        assert_eq!(config.model_path, PathBuf::from("MachineLearning/model.json"));
    }

    #[test]
    fn test_overrides() {
        let config = SensorConfig::from_lookup(lookup(&[
            ("SENSOR_TRAINING_CSV", "data/train.csv"),
            ("SENSOR_EXPERIMENT_SECONDS", "5"),
            ("SENSOR_TRAINER", "naive_bayes"),
            ("SENSOR_PRIMARY_METRIC", "log_loss"),
            ("SENSOR_COLOR", "false"),
            ("SENSOR_CV_FOLDS", "10"),
        ]));
        assert_eq!(config.training_csv, PathBuf::from("data/train.csv"));
        assert_eq!(config.experiment_seconds, 5);
        assert_eq!(config.trainer, TrainerKind::NaiveBayes);
        assert_eq!(config.primary_metric, OptimizationMetric::LogLoss);
        assert!(!config.color);
        assert_eq!(config.cv_folds, 10);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SensorConfig::from_lookup(lookup(&[
            ("SENSOR_MAX_TRIALS", "many"),
            ("SENSOR_TRAINER", "random_forest"),
            ("SENSOR_SEED", "-3"),
        ]));
        assert_eq!(config.max_trials, 100);
        assert_eq!(config.trainer, TrainerKind::averaged_perceptron());
        assert_eq!(config.seed, 1);
    }

    #[test]
    fn test_automl_config_is_clamped() {
        let config = SensorConfig {
            experiment_seconds: 0,
            validation_ratio: 0.99,
            ..SensorConfig::default()
        };
        let automl = config.automl();
        assert_eq!(automl.time_budget_secs, 1);
        assert_eq!(automl.validation_ratio, 0.5);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SensorConfig = serde_json::from_str(r#"{"top_runs": 5}"#).unwrap();
        assert_eq!(config.top_runs, 5);
        assert_eq!(config.max_trials, 100);
    }
}
