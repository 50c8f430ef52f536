//! # automl
//!
//! Automatic machine learning for sensor light-source classification.
//! Provides trainer search, model selection, evaluation and persistence.

pub use automl_facade::*;
