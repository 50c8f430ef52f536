//! Data Source Service Provider Interface
//!
//! Defines the dataset loader contract and the tabular types it produces
//! for sensor readings.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DatasetLoader;
pub use error::{DataError, Result};
pub use model::{
    Column, ColumnKind, Dataset, Schema, SensorSample, INFRARED, LABEL, LUMINOSITY, TEMPERATURE,
};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_schema_columns() {
        let schema = Schema::sensor();
        let names: Vec<&str> = schema.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![TEMPERATURE, LUMINOSITY, INFRARED, LABEL]);
        assert_eq!(schema.column(LABEL).unwrap().source_index, 4);
        assert_eq!(schema.column(LABEL).unwrap().kind, ColumnKind::Text);
    }

    #[test]
    fn test_sample_feature_lookup() {
        let sample = SensorSample::new(120.0, 21.5, 3.0, "sun");
        assert_eq!(sample.feature(LUMINOSITY), Some(120.0));
        assert_eq!(sample.feature(TEMPERATURE), Some(21.5));
        assert_eq!(sample.feature(INFRARED), Some(3.0));
        assert_eq!(sample.feature(LABEL), None);
        assert_eq!(sample.feature("Distance"), None);
    }

    #[test]
    fn test_unlabeled_sample() {
        let sample = SensorSample::unlabeled(1.0, 2.0, 3.0);
        assert!(sample.label.is_empty());
        assert!(!sample.is_labeled());
    }

    #[test]
    fn test_dataset_distinct_labels_in_order() {
        let dataset = Dataset::new(
            Schema::sensor(),
            vec![
                SensorSample::new(1.0, 1.0, 1.0, "lamp"),
                SensorSample::new(2.0, 2.0, 2.0, "sun"),
                SensorSample::new(3.0, 3.0, 3.0, "lamp"),
                SensorSample::new(4.0, 4.0, 4.0, "dark"),
            ],
        );
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.distinct_labels(), vec!["lamp", "sun", "dark"]);
    }

    #[test]
    fn test_dataset_subset_preserves_schema() {
        let dataset = Dataset::new(
            Schema::sensor(),
            vec![
                SensorSample::new(1.0, 1.0, 1.0, "a"),
                SensorSample::new(2.0, 2.0, 2.0, "b"),
                SensorSample::new(3.0, 3.0, 3.0, "c"),
            ],
        );
        let subset = dataset.subset(&[2, 0]);
        assert_eq!(subset.schema(), dataset.schema());
        assert_eq!(subset.samples()[0].label, "c");
        assert_eq!(subset.samples()[1].label, "a");
    }
}
