//! In-memory tabular view of loaded samples.

use serde::{Deserialize, Serialize};

use super::{Schema, SensorSample};

/// Samples together with the schema they were read with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    schema: Schema,
    samples: Vec<SensorSample>,
}

impl Dataset {
    pub fn new(schema: Schema, samples: Vec<SensorSample>) -> Self {
        Self { schema, samples }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn samples(&self) -> &[SensorSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Labels in order of first appearance.
    pub fn distinct_labels(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for sample in &self.samples {
            if !seen.contains(&sample.label.as_str()) {
                seen.push(sample.label.as_str());
            }
        }
        seen
    }

    /// New dataset holding the samples at `indices`, in that order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        Self {
            schema: self.schema.clone(),
            samples: indices
                .iter()
                .filter_map(|&i| self.samples.get(i).cloned())
                .collect(),
        }
    }
}
