//! Candidate search strategy trait for AutoML.

use crate::model::TrainerKind;

/// Trait for strategies that enumerate trainer configurations to try.
///
/// Returning `None` means the candidate space is exhausted, which ends a
/// search normally.
pub trait SearchStrategy {
    /// Next candidate configuration, if any.
    fn next_candidate(&mut self) -> Option<TrainerKind>;
}
