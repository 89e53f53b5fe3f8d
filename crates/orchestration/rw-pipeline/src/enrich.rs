//! The enrichment pipeline.
//!
//! Load reference tables -> build indices -> per row: parse list cells,
//! enrich both sides, record stats -> append analysis columns -> write.

use crate::progress::Progress;
use rw_dataset::{backup_file, parse_list_cell, RuleDataset};
use rw_enrichment::{
    load_ip_table, load_name_table, load_subnet_table, Enricher, LayeredSubnetIndex,
};
use rw_error::{DatasetError, Result, RwError};
use rw_stats::{RunStats, StatsSnapshot};
use rw_types::{EnrichConfig, Side, SideAnalysis};
use std::path::Path;
use tracing::{info, warn};

/// Runs the enrichment pipeline.
///
/// Fatal conditions (missing file, missing column) abort before the output
/// file is opened. A failed backup copy is logged and the run continues.
pub fn run(config: &EnrichConfig) -> Result<StatsSnapshot> {
    config.validate().map_err(RwError::Config)?;
    verify_inputs(config)?;

    if config.create_backup {
        match backup_file(&config.input) {
            Ok(path) => info!(path = %path.display(), "Created backup"),
            Err(e) => warn!(error = %e, "Continuing without a backup"),
        }
    }

    let ip_table = load_ip_table(&config.ip_table)?;
    let mut subnet_index = LayeredSubnetIndex::new();
    for path in &config.subnet_tables {
        subnet_index.push(load_subnet_table(path)?);
    }
    let names = load_name_table(&config.id_name_table)?;

    info!(
        ip_entries = ip_table.len(),
        subnet_tables = subnet_index.table_count(),
        subnet_entries = subnet_index.entry_count(),
        id_names = names.len(),
        "Built lookup indices"
    );

    let enricher = Enricher::new(ip_table, subnet_index, names);

    let mut dataset = RuleDataset::read(&config.input)?;
    let source_idx = dataset.column_index(&config.source_column)?;
    let dest_idx = dataset.column_index(&config.dest_column)?;

    let mut stats = RunStats::new();
    let progress = Progress::new(dataset.len() as u64, config.progress_every);

    let mut source_values = Vec::with_capacity(dataset.len());
    let mut dest_values = Vec::with_capacity(dataset.len());

    for row in 0..dataset.len() {
        let source = enrich_cell(&enricher, dataset.value(row, source_idx));
        let dest = enrich_cell(&enricher, dataset.value(row, dest_idx));

        stats.record_side(Side::Source, &source);
        stats.record_side(Side::Destination, &dest);
        stats.record_row();

        source_values.push(serialize_analysis(&source)?);
        dest_values.push(serialize_analysis(&dest)?);

        progress.row_done(row as u64 + 1);
    }

    dataset.append_column(config.source_analysis_column(), source_values)?;
    dataset.append_column(config.dest_analysis_column(), dest_values)?;
    dataset.write(&config.output)?;

    stats.complete();
    Ok(stats.snapshot())
}

/// Parses one list cell and enriches its tokens.
///
/// An invalid cell degrades to zero tokens; one malformed cell must not
/// abort an otherwise-valid batch.
fn enrich_cell(enricher: &Enricher, raw: &str) -> SideAnalysis {
    enricher.enrich(parse_list_cell(raw).tokens())
}

fn serialize_analysis(analysis: &SideAnalysis) -> Result<String> {
    serde_json::to_string(&analysis.entries)
        .map_err(|e| DatasetError::Serialize(e.to_string()).into())
}

/// Checks every input file up front so one error report covers them all.
fn verify_inputs(config: &EnrichConfig) -> Result<()> {
    let mut missing: Vec<String> = Vec::new();
    let mut check = |path: &Path| {
        if !path.exists() {
            missing.push(path.display().to_string());
        }
    };

    check(&config.input);
    check(&config.ip_table);
    for path in &config.subnet_tables {
        check(path);
    }
    check(&config.id_name_table);

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RwError::MissingInputs(missing))
    }
}
