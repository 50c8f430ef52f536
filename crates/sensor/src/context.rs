//! Process-wide randomness source for training.

/// Seed every training run derives its randomness from, so identical data
/// and configuration give identical models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelContext {
    seed: u64,
}

impl ModelContext {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for ModelContext {
    fn default() -> Self {
        Self::new(1)
    }
}
