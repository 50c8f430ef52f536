//! Contract module containing the dataset loader trait.

mod dataset_loader;

pub use dataset_loader::DatasetLoader;
