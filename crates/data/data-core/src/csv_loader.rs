//! Delimited text loader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use data_spi::{ColumnKind, DataError, Dataset, DatasetLoader, Result, Schema, SensorSample};
use data_spi::{INFRARED, LABEL, LUMINOSITY, TEMPERATURE};

/// Loads comma-delimited files with a header row into a [`Dataset`].
///
/// Quoted fields are allowed; sparse encodings are not. Columns are picked
/// by their schema `source_index`, so unused source columns are skipped.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    schema: Schema,
    delimiter: u8,
    has_header: bool,
}

impl CsvLoader {
    /// Loader for the sensor file layout.
    pub fn new() -> Self {
        Self {
            schema: Schema::sensor(),
            delimiter: b',',
            has_header: true,
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Load from any reader. `source` names the input in errors.
    pub fn load_reader<R: Read>(&self, reader: R, source: &str) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .quoting(true)
            .flexible(true)
            .from_reader(reader);

        let mut samples = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| csv_error(&e))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            samples.push(self.parse_record(&record, line)?);
        }

        if samples.is_empty() {
            return Err(DataError::Empty(source.to_string()));
        }

        tracing::debug!(source, rows = samples.len(), "loaded dataset");
        Ok(Dataset::new(self.schema.clone(), samples))
    }

    fn parse_record(&self, record: &csv::StringRecord, line: u64) -> Result<SensorSample> {
        let mut sample = SensorSample::unlabeled(0.0, 0.0, 0.0);

        for column in self.schema.columns() {
            let raw = record
                .get(column.source_index)
                .ok_or_else(|| DataError::MissingColumn {
                    column: column.name.clone(),
                    line,
                })?
                .trim();

            match column.kind {
                ColumnKind::Single => {
                    let value: f32 = raw.parse().map_err(|_| DataError::Parse {
                        line,
                        reason: format!("column '{}': '{}' is not a number", column.name, raw),
                    })?;
                    match column.name.as_str() {
                        TEMPERATURE => sample.temperature = value,
                        LUMINOSITY => sample.luminosity = value,
                        INFRARED => sample.infrared = value,
                        _ => {}
                    }
                }
                ColumnKind::Text => {
                    if column.name == LABEL {
                        sample.label = raw.to_string();
                    }
                }
            }
        }

        Ok(sample)
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader for CsvLoader {
    fn name(&self) -> &str {
        "csv"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn load(&self, path: &Path) -> Result<Dataset> {
        if !path.exists() {
            return Err(DataError::NotFound(path.display().to_string()));
        }
        let file = File::open(path).map_err(|e| DataError::Io(format!("{}: {}", path.display(), e)))?;
        self.load_reader(BufReader::new(file), &path.display().to_string())
    }
}

fn csv_error(error: &csv::Error) -> DataError {
    match error.position() {
        Some(pos) => DataError::Parse {
            line: pos.line(),
            reason: error.to_string(),
        },
        None => DataError::Io(error.to_string()),
    }
}
