//! # sensor
//!
//! Light-source classification from luminosity, temperature and infrared
//! readings.
//!
//! - [`ModelService`]: current model slot, prediction, training entry points
//! - [`ManualTrainer`]: fixed pipeline with a configured trainer
//! - [`AutoTrainer`]: time-boxed AutoML search with progress reporting
//! - [`ReportPrinter`] / [`ProgressReporter`]: console reports
//! - [`stats`]: fold statistics for cross-validation reports

pub mod auto_train;
pub mod config;
pub mod context;
pub mod error;
pub mod manual;
mod outcome;
pub mod progress;
pub mod report;
pub mod service;
pub mod stats;

pub use auto_train::{select_best, AutoTrainer, Stage};
pub use config::SensorConfig;
pub use context::ModelContext;
pub use error::{Result, TrainingError};
pub use manual::ManualTrainer;
pub use outcome::TrainingOutcome;
pub use progress::{ProgressReporter, ProgressState};
pub use report::{Color, ReportPrinter};
pub use service::ModelService;
pub use stats::FoldStatistic;
