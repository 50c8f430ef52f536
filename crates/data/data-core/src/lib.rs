//! Data Source Core
//!
//! Implementations for dataset loaders.

pub mod csv_loader;

pub use csv_loader::CsvLoader;
