//! Sensor sample type.

use serde::{Deserialize, Serialize};

use super::schema::{INFRARED, LUMINOSITY, TEMPERATURE};

/// A single sensor reading with its light-source label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    /// Light level
    pub luminosity: f32,
    /// Ambient temperature
    pub temperature: f32,
    /// Infrared level
    pub infrared: f32,
    /// Light source; empty for prediction-time samples
    pub label: String,
}

impl SensorSample {
    /// Create a labeled sample.
    pub fn new(luminosity: f32, temperature: f32, infrared: f32, label: impl Into<String>) -> Self {
        Self {
            luminosity,
            temperature,
            infrared,
            label: label.into(),
        }
    }

    /// Create a sample with an absent label.
    pub fn unlabeled(luminosity: f32, temperature: f32, infrared: f32) -> Self {
        Self::new(luminosity, temperature, infrared, String::new())
    }

    /// Whether the sample carries a label.
    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }

    /// Numeric column value by schema name.
    pub fn feature(&self, column: &str) -> Option<f32> {
        match column {
            TEMPERATURE => Some(self.temperature),
            LUMINOSITY => Some(self.luminosity),
            INFRARED => Some(self.infrared),
            _ => None,
        }
    }
}
