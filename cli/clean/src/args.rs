//! CLI argument definitions for rw-clean.

use clap::Parser;
pub use rw_cli_common::LogLevel;
use rw_types::CleanConfig;
use std::path::PathBuf;

/// Rule-dataset cleaning for ruleweave.
///
/// Folds IP/subnet entries buried in the group columns into the IP columns
/// and removes address-range entries the enrichment pipeline cannot resolve.
#[derive(Parser, Debug)]
#[command(name = "rw-clean")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Rule dataset to clean
    #[arg(short = 'i', long, env = "RW_INPUT")]
    pub input: PathBuf,

    /// Output file for the cleaned dataset
    #[arg(short = 'o', long, env = "RW_OUTPUT")]
    pub output: PathBuf,

    /// Column holding the source-side token list
    #[arg(long, default_value = "Source IP")]
    pub source_ip_column: String,

    /// Column holding the destination-side token list
    #[arg(long, default_value = "Destination IP")]
    pub dest_ip_column: String,

    /// Group column folded into the source-side list
    #[arg(long, default_value = "Source Groups")]
    pub source_groups_column: String,

    /// Group column folded into the destination-side list
    #[arg(long, default_value = "Destination Groups")]
    pub dest_groups_column: String,

    /// Skip the timestamped backup copy of the input
    #[arg(long)]
    pub no_backup: bool,

    /// Log level
    #[arg(short = 'l', long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Builds the pipeline configuration.
    pub fn to_config(&self) -> CleanConfig {
        let mut config =
            CleanConfig::new(&self.input, &self.output).with_backup(!self.no_backup);
        config.source_ip_column = self.source_ip_column.clone();
        config.dest_ip_column = self.dest_ip_column.clone();
        config.source_groups_column = self.source_groups_column.clone();
        config.dest_groups_column = self.dest_groups_column.clone();
        config
    }
}
