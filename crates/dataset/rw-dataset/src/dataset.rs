//! In-memory rule dataset with column append and write-back.

use rw_error::{DatasetError, Result};
use std::path::Path;
use tracing::info;

/// A rule dataset loaded fully into memory.
///
/// Rows and columns keep their input order; enrichment only ever appends
/// columns, so writing the dataset back reproduces the original cells
/// verbatim with the new columns at the end.
#[derive(Debug, Clone)]
pub struct RuleDataset {
    /// File name component of the source path, used in error messages.
    name: String,

    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RuleDataset {
    /// Reads a CSV file into memory.
    ///
    /// Ragged rows are tolerated: short rows are padded with empty cells and
    /// overlong rows are truncated to the header width.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.display().to_string()).into());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| DatasetError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| {
                DatasetError::Parse(format!(
                    "Failed to parse CSV headers in {}: {}",
                    path.display(),
                    e
                ))
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let width = headers.len();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                DatasetError::Parse(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        info!(path = %path.display(), rows = rows.len(), columns = width, "Loaded rule dataset");

        Ok(Self {
            name,
            headers,
            rows,
        })
    }

    /// Returns the column headers in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the index of a named column.
    ///
    /// A missing column is fatal and reports every column that is present.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers.iter().position(|h| h == column).ok_or_else(|| {
            DatasetError::MissingColumn {
                file: self.name.clone(),
                column: column.to_string(),
                present: self.headers.clone(),
            }
            .into()
        })
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns one cell.
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replaces one cell.
    pub fn set_value(&mut self, row: usize, column: usize, value: String) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = value;
        }
    }

    /// Appends a column; `values` must hold exactly one cell per row.
    pub fn append_column(&mut self, header: impl Into<String>, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(DatasetError::Write(format!(
                "column has {} values for {} rows",
                values.len(),
                self.rows.len()
            ))
            .into());
        }
        self.headers.push(header.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Writes the dataset to a CSV file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| DatasetError::Write(format!("Failed to create {}: {}", path.display(), e)))?;

        writer
            .write_record(&self.headers)
            .map_err(|e| DatasetError::Write(format!("Failed to write {}: {}", path.display(), e)))?;
        for row in &self.rows {
            writer.write_record(row).map_err(|e| {
                DatasetError::Write(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }
        writer
            .flush()
            .map_err(|e| DatasetError::Write(format!("Failed to flush {}: {}", path.display(), e)))?;

        info!(path = %path.display(), rows = self.rows.len(), "Wrote rule dataset");

        Ok(())
    }
}
