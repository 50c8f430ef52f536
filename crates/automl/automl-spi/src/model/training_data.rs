//! Validated training rows.

use crate::error::AutoMLError;

/// Feature rows with dense label keys, checked for shape consistency.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingData {
    features: Vec<Vec<f64>>,
    labels: Vec<usize>,
    num_classes: usize,
}

impl TrainingData {
    pub fn new(
        features: Vec<Vec<f64>>,
        labels: Vec<usize>,
        num_classes: usize,
    ) -> Result<Self, AutoMLError> {
        if features.len() != labels.len() {
            return Err(AutoMLError::InvalidParameter {
                name: "labels".to_string(),
                reason: format!("{} rows but {} labels", features.len(), labels.len()),
            });
        }
        if features.is_empty() {
            return Err(AutoMLError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if num_classes < 2 {
            return Err(AutoMLError::InsufficientClasses {
                actual: num_classes,
            });
        }

        let width = features[0].len();
        if width == 0 {
            return Err(AutoMLError::InvalidParameter {
                name: "features".to_string(),
                reason: "rows have no features".to_string(),
            });
        }
        if let Some(row) = features.iter().find(|r| r.len() != width) {
            return Err(AutoMLError::InvalidParameter {
                name: "features".to_string(),
                reason: format!("expected {} features per row, got {}", width, row.len()),
            });
        }
        if let Some(&label) = labels.iter().find(|&&l| l >= num_classes) {
            return Err(AutoMLError::InvalidParameter {
                name: "labels".to_string(),
                reason: format!("label key {} out of range for {} classes", label, num_classes),
            });
        }

        Ok(Self {
            features,
            labels,
            num_classes,
        })
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn width(&self) -> usize {
        self.features[0].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_data() {
        let data = TrainingData::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]], vec![0, 1], 2).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.width(), 2);
        assert_eq!(data.num_classes(), 2);
    }

    #[test]
    fn test_rejects_shape_problems() {
        assert!(TrainingData::new(vec![vec![0.0]], vec![0, 1], 2).is_err());
        assert!(TrainingData::new(vec![], vec![], 2).is_err());
        assert!(TrainingData::new(vec![vec![0.0], vec![1.0, 2.0]], vec![0, 1], 2).is_err());
        assert!(TrainingData::new(vec![vec![0.0], vec![1.0]], vec![0, 2], 2).is_err());
    }

    #[test]
    fn test_rejects_single_class() {
        let err = TrainingData::new(vec![vec![0.0]], vec![0], 1).unwrap_err();
        assert!(matches!(err, AutoMLError::InsufficientClasses { actual: 1 }));
    }
}
