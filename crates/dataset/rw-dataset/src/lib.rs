//! Rule-dataset I/O for ruleweave.
//!
//! This crate provides:
//! - [`RuleDataset`] - an in-memory CSV table preserving column order and
//!   passthrough fields, with column append and write-back
//! - [`parse_list_cell`] / [`ListCell`] - explicit parsing of serialized
//!   token-list cells
//! - [`backup_file`] - timestamped backup copies of an input file

mod backup;
mod dataset;
mod list_cell;

pub use backup::backup_file;
pub use dataset::RuleDataset;
pub use list_cell::{parse_list_cell, ListCell};
