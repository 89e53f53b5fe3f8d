//! Configuration for the enrich and clean pipelines.
//!
//! File paths and switches live in explicit config structs populated from
//! CLI flags or environment variables, never in module-level constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the enrichment pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichConfig {
    /// Rule dataset to enrich.
    pub input: PathBuf,

    /// Where the enriched dataset is written.
    pub output: PathBuf,

    /// Single-IP reference table.
    pub ip_table: PathBuf,

    /// Subnet reference tables, in descending trust order; the first table
    /// containing a key wins.
    pub subnet_tables: Vec<PathBuf>,

    /// Identifier -> display-name reference table.
    pub id_name_table: PathBuf,

    /// Column holding the serialized source-side token list.
    #[serde(default = "default_source_column")]
    pub source_column: String,

    /// Column holding the serialized destination-side token list.
    #[serde(default = "default_dest_column")]
    pub dest_column: String,

    /// Copy the input aside before writing anything.
    #[serde(default = "default_true")]
    pub create_backup: bool,

    /// Emit a progress line every N rows; `None` disables progress output.
    #[serde(default)]
    pub progress_every: Option<u64>,
}

impl EnrichConfig {
    /// Creates a configuration for the given input/output pair with default
    /// column names, backup enabled, and no progress output.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ip_table: PathBuf::new(),
            subnet_tables: Vec::new(),
            id_name_table: PathBuf::new(),
            source_column: default_source_column(),
            dest_column: default_dest_column(),
            create_backup: true,
            progress_every: None,
        }
    }

    pub fn with_ip_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.ip_table = path.into();
        self
    }

    /// Appends a subnet table; call order defines lookup priority.
    pub fn with_subnet_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.subnet_tables.push(path.into());
        self
    }

    pub fn with_id_name_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.id_name_table = path.into();
        self
    }

    pub fn with_source_column(mut self, column: impl Into<String>) -> Self {
        self.source_column = column.into();
        self
    }

    pub fn with_dest_column(mut self, column: impl Into<String>) -> Self {
        self.dest_column = column.into();
        self
    }

    pub fn with_backup(mut self, create_backup: bool) -> Self {
        self.create_backup = create_backup;
        self
    }

    pub fn with_progress_every(mut self, every: Option<u64>) -> Self {
        self.progress_every = every;
        self
    }

    /// Name of the analysis column appended for the source side.
    pub fn source_analysis_column(&self) -> String {
        format!("{} Analysis", self.source_column)
    }

    /// Name of the analysis column appended for the destination side.
    pub fn dest_analysis_column(&self) -> String {
        format!("{} Analysis", self.dest_column)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.subnet_tables.is_empty() {
            return Err("at least one subnet table is required".to_string());
        }
        if self.input == self.output {
            return Err("input and output must be different files".to_string());
        }
        if self.source_column.trim().is_empty() || self.dest_column.trim().is_empty() {
            return Err("source and destination column names must not be empty".to_string());
        }
        if let Some(0) = self.progress_every {
            return Err("progress interval must be at least 1 row".to_string());
        }
        Ok(())
    }
}

/// Configuration for the dataset-cleaning pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Rule dataset to clean.
    pub input: PathBuf,

    /// Where the cleaned dataset is written.
    pub output: PathBuf,

    #[serde(default = "default_source_column")]
    pub source_ip_column: String,

    #[serde(default = "default_dest_column")]
    pub dest_ip_column: String,

    /// Group column whose IP-shaped entries are folded into the source list.
    #[serde(default = "default_source_groups_column")]
    pub source_groups_column: String,

    /// Group column whose IP-shaped entries are folded into the destination list.
    #[serde(default = "default_dest_groups_column")]
    pub dest_groups_column: String,

    #[serde(default = "default_true")]
    pub create_backup: bool,
}

impl CleanConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            source_ip_column: default_source_column(),
            dest_ip_column: default_dest_column(),
            source_groups_column: default_source_groups_column(),
            dest_groups_column: default_dest_groups_column(),
            create_backup: true,
        }
    }

    pub fn with_backup(mut self, create_backup: bool) -> Self {
        self.create_backup = create_backup;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.input == self.output {
            return Err("input and output must be different files".to_string());
        }
        Ok(())
    }
}

fn default_source_column() -> String {
    "Source IP".to_string()
}

fn default_dest_column() -> String {
    "Destination IP".to_string()
}

fn default_source_groups_column() -> String {
    "Source Groups".to_string()
}

fn default_dest_groups_column() -> String {
    "Destination Groups".to_string()
}

fn default_true() -> bool {
    true
}
