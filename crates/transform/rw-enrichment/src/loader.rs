//! CSV loading for reference tables.

use crate::{AttributeSet, IpTable, NameTable, SubnetTable};
use rw_error::{Result, TableError};
use std::path::Path;
use tracing::{debug, info};

/// Key column of the single-IP table.
const IP_KEY: &str = "ip";

/// Key column of the subnet tables.
const SUBNET_KEY: &str = "subnet";

/// Key and value columns of the id-name table.
const IDENTIFIER_KEY: &str = "identifier";
const NAME_COLUMN: &str = "name";

/// Loads the single-IP reference table.
///
/// The `ip` column is required; attribute columns are picked up when present.
/// Rows with a blank key are skipped. Duplicate keys are last-write-wins.
pub fn load_ip_table(path: &Path) -> Result<IpTable> {
    let (headers, records) = read_csv(path)?;
    let key_idx = require_column(path, &headers, IP_KEY)?;
    let columns = AttrColumns::locate(&headers);

    let mut table = IpTable::new(table_name(path));
    let mut skipped = 0;
    for (line, record) in records.iter().enumerate() {
        let key = record.get(key_idx).unwrap_or("").trim();
        if key.is_empty() {
            debug!(line = line + 2, "Skipping row with blank ip key");
            skipped += 1;
            continue;
        }
        table.insert(key, columns.attributes(record));
    }

    info!(
        path = %path.display(),
        entries = table.len(),
        skipped = skipped,
        "Loaded IP table"
    );

    Ok(table)
}

/// Loads one subnet reference table.
///
/// The `subnet` column is required; attribute columns are picked up when
/// present. Rows with a blank key are skipped.
pub fn load_subnet_table(path: &Path) -> Result<SubnetTable> {
    let (headers, records) = read_csv(path)?;
    let key_idx = require_column(path, &headers, SUBNET_KEY)?;
    let columns = AttrColumns::locate(&headers);

    let mut table = SubnetTable::new(table_name(path));
    let mut skipped = 0;
    for (line, record) in records.iter().enumerate() {
        let key = record.get(key_idx).unwrap_or("").trim();
        if key.is_empty() {
            debug!(line = line + 2, "Skipping row with blank subnet key");
            skipped += 1;
            continue;
        }
        table.insert(key, columns.attributes(record));
    }

    info!(
        path = %path.display(),
        entries = table.len(),
        skipped = skipped,
        "Loaded subnet table"
    );

    Ok(table)
}

/// Loads the identifier-to-name reference table.
///
/// The `identifier` column is required. Rows with a blank identifier or a
/// blank name are skipped; a mapping to nothing is not a mapping.
pub fn load_name_table(path: &Path) -> Result<NameTable> {
    let (headers, records) = read_csv(path)?;
    let key_idx = require_column(path, &headers, IDENTIFIER_KEY)?;
    let name_idx = headers.iter().position(|h| h == NAME_COLUMN);

    let mut table = NameTable::new();
    let mut skipped = 0;
    for record in &records {
        let identifier = record.get(key_idx).unwrap_or("").trim();
        let name = name_idx
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .unwrap_or("");
        if identifier.is_empty() || name.is_empty() {
            skipped += 1;
            continue;
        }
        table.insert(identifier, name);
    }

    info!(
        path = %path.display(),
        entries = table.len(),
        skipped = skipped,
        "Loaded id-name table"
    );

    Ok(table)
}

/// Positions of the optional attribute columns in a table header.
struct AttrColumns {
    environment: Option<usize>,
    function: Option<usize>,
    location: Option<usize>,
    infra: Option<usize>,
    identifier: Option<usize>,
}

impl AttrColumns {
    fn locate(headers: &[String]) -> Self {
        let position = |name: &str| headers.iter().position(|h| h == name);
        Self {
            environment: position("environment"),
            function: position("function"),
            location: position("location"),
            infra: position("infra"),
            identifier: position("identifier"),
        }
    }

    fn attributes(&self, record: &csv::StringRecord) -> AttributeSet {
        AttributeSet {
            environment: cell(record, self.environment),
            function: cell(record, self.function),
            location: cell(record, self.location),
            infra: cell(record, self.infra),
            identifier: cell(record, self.identifier),
        }
    }
}

/// Extracts a trimmed cell; empty cells become absent attributes.
fn cell(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Reads a CSV file into (headers, records).
fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<csv::StringRecord>)> {
    if !path.exists() {
        return Err(TableError::NotFound(path.display().to_string()).into());
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| TableError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| {
            TableError::Parse(format!(
                "Failed to parse CSV headers in {}: {}",
                path.display(),
                e
            ))
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let records: Vec<csv::StringRecord> = reader.records().filter_map(|r| r.ok()).collect();

    Ok((headers, records))
}

fn require_column(path: &Path, headers: &[String], column: &str) -> Result<usize> {
    headers.iter().position(|h| h == column).ok_or_else(|| {
        TableError::MissingColumn {
            file: table_name(path),
            column: column.to_string(),
            present: headers.to_vec(),
        }
        .into()
    })
}

/// Table name used in analysis output: the file name component of the path.
fn table_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
