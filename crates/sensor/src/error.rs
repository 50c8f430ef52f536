//! Training error types.

use automl::AutoMLError;
use data_spi::DataError;
use thiserror::Error;

/// Fatal errors of a training run.
///
/// Any of these leaves the current model and the persisted archive exactly
/// as they were before the run started.
#[derive(Error, Debug, Clone)]
pub enum TrainingError {
    /// Training or testing data could not be loaded.
    #[error("Data load failed: {0}")]
    DataLoad(#[from] DataError),

    /// The configured pipeline could not be fitted.
    #[error("Fitting {trainer} failed: {source}")]
    Fit {
        trainer: String,
        #[source]
        source: AutoMLError,
    },

    /// The search produced no trial with a usable primary metric.
    #[error("No viable model: {0}")]
    NoViableModel(String),

    /// Scoring the held-out test set failed.
    #[error("Evaluation failed: {0}")]
    Evaluation(#[source] AutoMLError),

    /// The model archive could not be written or read.
    #[error(transparent)]
    Persistence(AutoMLError),
}

pub type Result<T> = std::result::Result<T, TrainingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_load_from() {
        let err: TrainingError = DataError::NotFound("training.csv".to_string()).into();
        assert!(matches!(err, TrainingError::DataLoad(_)));
        assert!(err.to_string().starts_with("Data load failed"));
    }

    #[test]
    fn test_fit_message_names_trainer() {
        let err = TrainingError::Fit {
            trainer: "NaiveBayes".to_string(),
            source: AutoMLError::InsufficientClasses { actual: 1 },
        };
        assert!(err.to_string().contains("NaiveBayes"));
    }

    #[test]
    fn test_persistence_message_is_not_repeated() {
        let err = TrainingError::Persistence(AutoMLError::Persistence(
            "replacing model.json: Is a directory".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Persistence failed: replacing model.json: Is a directory"
        );
    }
}
