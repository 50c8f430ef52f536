//! Pipeline step implementations
//!
//! This crate provides implementations of the feature transformation steps:
//!
//! - [`LabelKeyMap`]: Map string labels to categorical keys
//! - [`Concatenate`]: Gather numeric columns into one feature vector
//! - [`MinMaxNormalizer`]: Normalize each feature to the fitted [0, 1] range

mod concatenate;
mod key_map;
mod normalize;

// Re-export traits from SPI
pub use pipeline_spi::{PipelineError, PipelineStep, Result};

// Re-export implementations
pub use concatenate::Concatenate;
pub use key_map::LabelKeyMap;
pub use normalize::MinMaxNormalizer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::PipelineStep;
    pub use crate::{Concatenate, LabelKeyMap, MinMaxNormalizer};
    pub use crate::{PipelineError, Result};
}
