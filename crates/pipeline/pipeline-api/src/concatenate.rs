//! Column concatenation into a feature vector

use data_spi::{ColumnKind, Schema, SensorSample};
use pipeline_spi::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Gathers numeric columns, in the given order, into one feature vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concatenate {
    output: String,
    columns: Vec<String>,
}

impl Concatenate {
    pub fn new<S: Into<String>>(output: impl Into<String>, columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            output: output.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Check that every input column exists in `schema` and is numeric.
    pub fn validate(&self, schema: &Schema) -> Result<()> {
        if self.columns.is_empty() {
            return Err(PipelineError::InvalidParameter {
                name: "columns".to_string(),
                reason: "at least one column is required".to_string(),
            });
        }
        for name in &self.columns {
            match schema.column(name) {
                Some(column) if column.kind == ColumnKind::Single => {}
                Some(_) => {
                    return Err(PipelineError::InvalidParameter {
                        name: name.clone(),
                        reason: "column is not numeric".to_string(),
                    })
                }
                None => {
                    return Err(PipelineError::InvalidParameter {
                        name: name.clone(),
                        reason: format!("column not found in schema {}", schema),
                    })
                }
            }
        }
        Ok(())
    }

    pub fn apply(&self, sample: &SensorSample) -> Result<Vec<f64>> {
        self.columns
            .iter()
            .map(|name| {
                sample
                    .feature(name)
                    .map(f64::from)
                    .ok_or_else(|| PipelineError::InvalidParameter {
                        name: name.clone(),
                        reason: "not a numeric sensor column".to_string(),
                    })
            })
            .collect()
    }
}
