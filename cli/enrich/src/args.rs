//! CLI argument definitions for rw-enrich.

use clap::Parser;
pub use rw_cli_common::LogLevel;
use rw_types::EnrichConfig;
use std::path::PathBuf;

/// Firewall-rule enrichment for ruleweave.
///
/// Resolves the IP/subnet tokens of a rule export against a layered set of
/// reference tables and appends one analysis column per side.
///
/// ## Examples
///
/// Enrich against three subnet tables in priority order:
///   rw-enrich -i rules.csv -o rules_analyzed.csv --ip-table ip.csv \
///     --subnet-tables ipam_subnet.csv dev_subnet.csv staging_subnet.csv \
///     --id-name-table itam.csv
#[derive(Parser, Debug)]
#[command(name = "rw-enrich")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Files ===
    /// Rule dataset to enrich
    #[arg(short = 'i', long, env = "RW_INPUT")]
    pub input: PathBuf,

    /// Output file for the enriched dataset
    #[arg(short = 'o', long, env = "RW_OUTPUT")]
    pub output: PathBuf,

    /// Single-IP reference table
    #[arg(long, env = "RW_IP_TABLE")]
    pub ip_table: PathBuf,

    /// Subnet reference tables, highest priority first (repeatable)
    #[arg(long = "subnet-tables", required = true, num_args = 1..)]
    pub subnet_tables: Vec<PathBuf>,

    /// Identifier-to-name reference table
    #[arg(long, env = "RW_ID_NAME_TABLE")]
    pub id_name_table: PathBuf,

    /// Skip the timestamped backup copy of the input
    #[arg(long)]
    pub no_backup: bool,

    // === Columns ===
    /// Column holding the source-side token list
    #[arg(long, default_value = "Source IP")]
    pub source_column: String,

    /// Column holding the destination-side token list
    #[arg(long, default_value = "Destination IP")]
    pub dest_column: String,

    // === Progress Options ===
    /// Enable progress reporting to stderr
    #[arg(long)]
    pub progress: bool,

    /// Rows between progress lines (must be >= 1)
    #[arg(long, default_value = "1000", value_parser = parse_positive_u64)]
    pub progress_every: u64,

    // === Logging ===
    /// Log level
    #[arg(short = 'l', long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Builds the pipeline configuration.
    pub fn to_config(&self) -> EnrichConfig {
        let mut config = EnrichConfig::new(&self.input, &self.output)
            .with_ip_table(&self.ip_table)
            .with_id_name_table(&self.id_name_table)
            .with_source_column(self.source_column.as_str())
            .with_dest_column(self.dest_column.as_str())
            .with_backup(!self.no_backup)
            .with_progress_every(self.progress.then_some(self.progress_every));
        for table in &self.subnet_tables {
            config = config.with_subnet_table(table);
        }
        config
    }
}

/// Parse a positive u64 (>= 1).
fn parse_positive_u64(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value < 1 {
        return Err(format!("{} is not in 1..", value));
    }
    Ok(value)
}
