//! File-backed dataset source for CSV, JSON and YAML documents.
//!
//! CSV files carry the schema in their header row. Empty fields are missing
//! cells; everything else is kept as text for numeric coercion.
//!
//! JSON and YAML accept two document shapes:
//!
//! - An array of records: `[{"sleep_hours": 7, ...}, ...]`. The schema is
//!   the union of record keys in first-seen order; absent keys are missing
//!   cells.
//! - A table: `{"columns": [...], "rows": [[...], ...]}`. Needed to declare
//!   a schema for a dataset with no rows.

use async_trait::async_trait;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::dataset::{CellValue, Dataset};
use crate::domain::foundation::ValidationError;
use crate::ports::{DatasetSource, IngestError};

/// Serialization format of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(DatasetFormat::Csv),
            Some("json") => Ok(DatasetFormat::Json),
            Some("yaml") | Some("yml") => Ok(DatasetFormat::Yaml),
            Some(other) => Err(IngestError::unsupported_format(format!(".{}", other))),
            None => Err(IngestError::unsupported_format(format!(
                "no file extension on {}",
                path.display()
            ))),
        }
    }
}

/// Dataset source reading a single file.
pub struct FileDatasetSource {
    path: PathBuf,
    format: Option<DatasetFormat>,
}

impl FileDatasetSource {
    /// Create a source whose format is inferred from the file extension.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: None,
        }
    }

    /// Create a source with an explicit format.
    pub fn with_format(path: impl AsRef<Path>, format: DatasetFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: Some(format),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve_format(&self) -> Result<DatasetFormat, IngestError> {
        match self.format {
            Some(format) => Ok(format),
            None => DatasetFormat::from_path(&self.path),
        }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn load(&self) -> Result<Dataset, IngestError> {
        let format = self.resolve_format()?;

        let content = fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => IngestError::NotFound(self.path.display().to_string()),
            _ => IngestError::Io(format!("{}: {}", self.path.display(), e)),
        })?;

        debug!(
            path = %self.path.display(),
            bytes = content.len(),
            ?format,
            "Dataset file read"
        );

        parse_dataset(&content, format)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Parses dataset text in the given format.
pub fn parse_dataset(content: &str, format: DatasetFormat) -> Result<Dataset, IngestError> {
    let document: DatasetDocument = match format {
        DatasetFormat::Csv => return parse_csv(content),
        DatasetFormat::Json => serde_json::from_str(content).map_err(|e| shape_error(&e))?,
        DatasetFormat::Yaml => serde_yaml::from_str(content).map_err(|e| shape_error(&e))?,
    };

    document.into_dataset()
}

fn parse_csv(content: &str) -> Result<Dataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(csv_cell).collect());
    }

    Dataset::new(columns, rows).map_err(table_error)
}

fn csv_cell(field: &str) -> CellValue {
    if field.trim().is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(field.to_string())
    }
}

fn csv_error(err: csv::Error) -> IngestError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths { .. } => IngestError::NotRectangular(err.to_string()),
        _ => IngestError::parse(err.to_string()),
    }
}

fn shape_error(err: &dyn fmt::Display) -> IngestError {
    IngestError::parse(format!(
        "expected an array of records or an object with `columns` and `rows` ({})",
        err
    ))
}

fn table_error(err: ValidationError) -> IngestError {
    match &err {
        ValidationError::InvalidFormat { field, .. } if field == "rows" => {
            IngestError::NotRectangular(err.to_string())
        }
        _ => IngestError::parse(err.to_string()),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetDocument {
    Records(Vec<OrderedRecord>),
    Table(TableDocument),
}

#[derive(Deserialize)]
struct TableDocument {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<CellValue>>,
}

impl DatasetDocument {
    fn into_dataset(self) -> Result<Dataset, IngestError> {
        match self {
            DatasetDocument::Table(table) => {
                Dataset::new(table.columns, table.rows).map_err(table_error)
            }
            DatasetDocument::Records(records) => {
                let mut columns: Vec<String> = Vec::new();
                for record in &records {
                    for (key, _) in &record.0 {
                        if !columns.contains(key) {
                            columns.push(key.clone());
                        }
                    }
                }

                let rows = records
                    .into_iter()
                    .map(|record| {
                        let mut row = vec![CellValue::Missing; columns.len()];
                        for (key, value) in record.0 {
                            if let Some(i) = columns.iter().position(|c| *c == key) {
                                row[i] = value;
                            }
                        }
                        row
                    })
                    .collect();

                Dataset::new(columns, rows).map_err(table_error)
            }
        }
    }
}

/// One record with its keys in document order.
struct OrderedRecord(Vec<(String, CellValue)>);

impl<'de> Deserialize<'de> for OrderedRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = OrderedRecord;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a record mapping column names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, CellValue)> = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, CellValue>()? {
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(entry) => entry.1 = value,
                        None => entries.push((key, value)),
                    }
                }
                Ok(OrderedRecord(entries))
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
