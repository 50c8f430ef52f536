//! Error module containing AutoML error types.
//!
//! This module defines error types for automatic machine learning operations.

mod automl_error;

pub use automl_error::AutoMLError;
