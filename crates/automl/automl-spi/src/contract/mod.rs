//! Contract module containing AutoML traits.
//!
//! This module defines the core traits for automatic machine learning:
//! - [`Trainer`] / [`Classifier`] - Fitting strategies and fitted models
//! - [`SearchStrategy`] - Candidate enumeration for a search
//! - [`ModelSelector`] - Experiment-driven model selection

mod model_selector;
mod search_strategy;
mod trainer;

pub use model_selector::ModelSelector;
pub use search_strategy::SearchStrategy;
pub use trainer::{Classifier, Trainer};
