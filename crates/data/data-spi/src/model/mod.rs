//! Data models for sensor datasets.

mod dataset;
mod schema;
mod sensor_sample;

pub use dataset::Dataset;
pub use schema::{Column, ColumnKind, Schema, INFRARED, LABEL, LUMINOSITY, TEMPERATURE};
pub use sensor_sample::SensorSample;
