//! The dataset-cleaning pipeline.
//!
//! Folds IP-shaped entries from the group columns into the IP columns and
//! drops `a.b.c.d-w.x.y.z` range entries the enrichment pipeline cannot
//! resolve. Group columns themselves are left untouched.

use rw_dataset::{backup_file, parse_list_cell, RuleDataset};
use rw_enrichment::{classify, EntryKind};
use rw_error::{DatasetError, Result, RwError};
use rw_types::CleanConfig;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use tracing::{info, warn};

/// Counters reported by a cleaning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanSummary {
    pub rows_processed: u64,
    pub source_extracted: u64,
    pub dest_extracted: u64,
    pub source_ranges_removed: u64,
    pub dest_ranges_removed: u64,
}

/// Runs the cleaning pipeline.
pub fn run(config: &CleanConfig) -> Result<CleanSummary> {
    config.validate().map_err(RwError::Config)?;
    if !config.input.exists() {
        return Err(DatasetError::NotFound(config.input.display().to_string()).into());
    }

    if config.create_backup {
        match backup_file(&config.input) {
            Ok(path) => info!(path = %path.display(), "Created backup"),
            Err(e) => warn!(error = %e, "Continuing without a backup"),
        }
    }

    let mut dataset = RuleDataset::read(&config.input)?;
    let source_ip_idx = dataset.column_index(&config.source_ip_column)?;
    let dest_ip_idx = dataset.column_index(&config.dest_ip_column)?;
    let source_groups_idx = dataset.column_index(&config.source_groups_column)?;
    let dest_groups_idx = dataset.column_index(&config.dest_groups_column)?;

    let mut summary = CleanSummary::default();

    for row in 0..dataset.len() {
        let source = clean_side(
            dataset.value(row, source_groups_idx),
            dataset.value(row, source_ip_idx),
        )?;
        dataset.set_value(row, source_ip_idx, source.cell);
        summary.source_extracted += source.extracted;
        summary.source_ranges_removed += source.ranges_removed;

        let dest = clean_side(
            dataset.value(row, dest_groups_idx),
            dataset.value(row, dest_ip_idx),
        )?;
        dataset.set_value(row, dest_ip_idx, dest.cell);
        summary.dest_extracted += dest.extracted;
        summary.dest_ranges_removed += dest.ranges_removed;

        summary.rows_processed += 1;
    }

    dataset.write(&config.output)?;

    info!(
        rows = summary.rows_processed,
        source_extracted = summary.source_extracted,
        dest_extracted = summary.dest_extracted,
        "Cleaned rule dataset"
    );

    Ok(summary)
}

struct CleanedSide {
    cell: String,
    extracted: u64,
    ranges_removed: u64,
}

/// Combines one side's IP list with the IP-shaped entries of its group list.
fn clean_side(groups_cell: &str, ip_cell: &str) -> Result<CleanedSide> {
    let mut tokens: Vec<String> = parse_list_cell(ip_cell).tokens().to_vec();

    let mut extracted = 0;
    for token in parse_list_cell(groups_cell).tokens() {
        if classify(token) != EntryKind::Unparseable {
            tokens.push(token.clone());
            extracted += 1;
        }
    }

    let before = tokens.len();
    tokens.retain(|token| !is_ip_range(token));
    let ranges_removed = (before - tokens.len()) as u64;

    let cell = serde_json::to_string(&tokens)
        .map_err(|e| DatasetError::Serialize(e.to_string()))?;

    Ok(CleanedSide {
        cell,
        extracted,
        ranges_removed,
    })
}

/// Recognizes `<addr>-<addr>` range entries.
fn is_ip_range(token: &str) -> bool {
    match token.split_once('-') {
        Some((start, end)) => {
            start.trim().parse::<IpAddr>().is_ok() && end.trim().parse::<IpAddr>().is_ok()
        }
        None => false,
    }
}
