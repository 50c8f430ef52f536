//! Column schema for tabular sensor data.

use serde::{Deserialize, Serialize};

pub const TEMPERATURE: &str = "Temperature";
pub const LUMINOSITY: &str = "Luminosity";
pub const INFRARED: &str = "Infrared";
pub const LABEL: &str = "Label";

/// Column value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// 32-bit float
    Single,
    /// UTF-8 string
    Text,
}

/// A named, typed column and its position in the source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub source_index: usize,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind, source_index: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            source_index,
        }
    }
}

/// Ordered set of columns describing a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Layout of the sensor CSV files. Source column 3 holds a distance
    /// reading that is not used.
    pub fn sensor() -> Self {
        Self::new(vec![
            Column::new(TEMPERATURE, ColumnKind::Single, 0),
            Column::new(LUMINOSITY, ColumnKind::Single, 1),
            Column::new(INFRARED, ColumnKind::Single, 2),
            Column::new(LABEL, ColumnKind::Text, 4),
        ])
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::sensor()
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{}:{:?}@{}", c.name, c.kind, c.source_index))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
