use std::{collections::HashSet, io::Error, path::PathBuf};

use serde_json::Value;

use crate::types::FeatureRecord;

#[derive(Debug)]
pub enum TableError {
    IoError(Error),
    CsvError(csv::Error),
}

impl From<Error> for TableError {
    fn from(err: Error) -> Self {
        TableError::IoError(err)
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        TableError::CsvError(err)
    }
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::IoError(e) => write!(f, "io error: {}", e),
            TableError::CsvError(e) => write!(f, "csv error: {}", e),
        }
    }
}

impl std::error::Error for TableError {}

/// Rows of feature records with the union of their keys as columns.
pub struct OutputTable<'a> {
    columns: Vec<String>,
    rows: &'a [FeatureRecord],
}

impl<'a> OutputTable<'a> {
    /// Columns appear in the order their key is first seen.
    pub fn from_records(rows: &'a [FeatureRecord]) -> Self {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for key in rows.iter().flat_map(|r| r.keys()) {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cells of every row, one per column; missing keys become empty cells.
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| row.get(c).map(render_cell).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Comma separated output with a header row and no index column.
    pub fn to_csv(&self) -> Result<Vec<u8>, TableError> {
        if self.columns.is_empty() {
            return Ok(Vec::new());
        }

        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(&self.columns)?;
        for row in self.cells() {
            wtr.write_record(&row)?;
        }

        wtr.into_inner()
            .map_err(|e| TableError::IoError(e.into_error()))
    }
}

pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accumulates the export rows and rewrites the output file on every
/// persist, so each finished month is on disk before the next one starts.
pub struct TableSink {
    path: PathBuf,
    rows: Vec<FeatureRecord>,
}

impl TableSink {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: Vec::new(),
        }
    }

    pub fn extend(&mut self, records: Vec<FeatureRecord>) -> &mut Self {
        self.rows.extend(records);
        self
    }

    /// Overwrites the output file with every row collected so far.
    pub async fn persist(&self) -> Result<(), TableError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let csv = OutputTable::from_records(&self.rows).to_csv()?;
        async_fs::write(&self.path, csv).await?;
        Ok(())
    }
}
