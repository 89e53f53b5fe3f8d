//! Error types and classification for ruleweave.
//!
//! This crate provides:
//! - [`RwError`] - Top-level error enum for all pipeline errors
//! - Domain-specific errors ([`DatasetError`], [`TableError`])
//! - [`Severity`] for exit-code and continue/abort decisions
//!
//! The pipeline is fail-before-write: anything classified [`Severity::Fatal`]
//! aborts the run before the output file is opened. Row-level conditions
//! (an unparseable list cell, a token missing from every reference table)
//! are absorbed by the pipeline and never surface as an error at all; they
//! only show up in the run statistics.

use thiserror::Error;

/// Top-level error type for ruleweave.
#[derive(Error, Debug)]
pub enum RwError {
    /// Rule-dataset errors (file access, parsing, writing)
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Reference-table errors (loading, schema)
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Several required input files are absent; reported together so the
    /// operator can fix them in one pass.
    #[error("Missing input files: {}", .0.join(", "))]
    MissingInputs(Vec<String>),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Rule-dataset errors.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Input file not found
    #[error("File not found: {0}")]
    NotFound(String),

    /// A required column is absent from the dataset header
    #[error("Column '{column}' not found in {file}; available columns: {}", .present.join(", "))]
    MissingColumn {
        file: String,
        column: String,
        present: Vec<String>,
    },

    /// I/O error during read
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV structure could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Writing the output file failed
    #[error("Write failed: {0}")]
    Write(String),

    /// Serializing an analysis column failed
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// Backup copy could not be created
    #[error("Backup failed: {0}")]
    Backup(String),
}

/// Reference-table errors.
#[derive(Error, Debug)]
pub enum TableError {
    /// Table file not found
    #[error("File not found: {0}")]
    NotFound(String),

    /// The key column is absent from the table header
    #[error("Key column '{column}' not found in {file}; available columns: {}", .present.join(", "))]
    MissingColumn {
        file: String,
        column: String,
        present: Vec<String>,
    },

    /// CSV structure could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error during read
    #[error("I/O error: {0}")]
    Io(String),
}

/// Error severity for abort/continue and exit-code decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Abort the run before any output is written.
    ///
    /// Examples: missing input file, missing required column
    Fatal,

    /// Log and continue; the run proceeds without the failed step.
    ///
    /// Example: backup copy could not be created
    Warning,
}

/// Classifies an error to determine whether the run can continue.
pub fn classify(error: &RwError) -> Severity {
    match error {
        RwError::Dataset(e) => classify_dataset_error(e),
        RwError::Table(_) => Severity::Fatal,
        RwError::MissingInputs(_) => Severity::Fatal,
        RwError::Config(_) => Severity::Fatal,
        RwError::Other(_) => Severity::Fatal,
    }
}

fn classify_dataset_error(error: &DatasetError) -> Severity {
    match error {
        DatasetError::Backup(_) => Severity::Warning,
        _ => Severity::Fatal,
    }
}

/// Result type alias using RwError.
pub type Result<T> = std::result::Result<T, RwError>;
