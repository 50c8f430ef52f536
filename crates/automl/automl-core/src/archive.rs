//! Versioned model archive
//!
//! The archive is a JSON envelope holding the trained model and the schema of
//! the data it was trained on. Writes go to a sibling temporary file that is
//! renamed into place, so readers never observe a half-written archive.

use std::fs;
use std::path::{Path, PathBuf};

use automl_spi::{AutoMLError, Result};
use data_spi::Schema;
use serde::{Deserialize, Serialize};

use crate::model::TrainedModel;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct ArchiveRef<'a> {
    format_version: u32,
    schema: &'a Schema,
    model: &'a TrainedModel,
}

#[derive(Deserialize)]
struct Archive {
    format_version: u32,
    schema: Schema,
    model: TrainedModel,
}

fn persistence(path: &Path, action: &str, e: impl std::fmt::Display) -> AutoMLError {
    AutoMLError::Persistence(format!("{} {}: {}", action, path.display(), e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `model` and its training `schema` to `path`.
pub fn save(model: &TrainedModel, schema: &Schema, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| persistence(parent, "creating", e))?;
    }

    let json = serde_json::to_vec_pretty(&ArchiveRef {
        format_version: FORMAT_VERSION,
        schema,
        model,
    })
    .map_err(|e| persistence(path, "encoding", e))?;

    let tmp = temp_path(path);
    fs::write(&tmp, json).map_err(|e| persistence(&tmp, "writing", e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(persistence(path, "replacing", e));
    }

    tracing::info!(path = %path.display(), trainer = %model.trainer(), "model saved");
    Ok(())
}

/// Read an archive from `path`, checking it was trained on `expected`.
pub fn load(path: &Path, expected: &Schema) -> Result<TrainedModel> {
    let bytes = fs::read(path).map_err(|e| persistence(path, "reading", e))?;
    let archive: Archive =
        serde_json::from_slice(&bytes).map_err(|e| persistence(path, "decoding", e))?;

    if archive.format_version != FORMAT_VERSION {
        return Err(AutoMLError::Persistence(format!(
            "{}: unsupported format version {} (expected {})",
            path.display(),
            archive.format_version,
            FORMAT_VERSION
        )));
    }
    if &archive.schema != expected {
        return Err(AutoMLError::SchemaMismatch {
            expected: expected.to_string(),
            found: archive.schema.to_string(),
        });
    }

    tracing::info!(path = %path.display(), trainer = %archive.model.trainer(), "model loaded");
    Ok(archive.model)
}
