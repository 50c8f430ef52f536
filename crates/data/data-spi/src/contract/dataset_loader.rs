//! Dataset loader trait definition.

use std::path::Path;

use crate::error::Result;
use crate::model::{Dataset, Schema};

/// Trait for loaders that read labeled tabular records into a [`Dataset`].
///
/// Implementations own the on-disk format; callers only see typed columns.
pub trait DatasetLoader: Send + Sync {
    /// Loader name.
    fn name(&self) -> &str;

    /// Schema every loaded dataset conforms to.
    fn schema(&self) -> &Schema;

    /// Load all records from `path`.
    fn load(&self, path: &Path) -> Result<Dataset>;
}
