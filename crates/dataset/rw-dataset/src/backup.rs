//! Timestamped backup copies of an input file.

use chrono::Local;
use rw_error::{DatasetError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Copies `input` to `<stem>_backup_<YYYYmmdd_HHMMSS>.<ext>` next to it.
///
/// Returns the backup path. Failure here is a warning-severity condition;
/// callers log it and continue without a backup.
pub fn backup_file(input: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup".to_string());

    let file_name = match input.extension() {
        Some(ext) => format!("{}_backup_{}.{}", stem, timestamp, ext.to_string_lossy()),
        None => format!("{}_backup_{}", stem, timestamp),
    };
    let backup_path = input.with_file_name(file_name);

    fs::copy(input, &backup_path).map_err(|e| {
        DatasetError::Backup(format!(
            "could not copy {} to {}: {}",
            input.display(),
            backup_path.display(),
            e
        ))
    })?;

    Ok(backup_path)
}
