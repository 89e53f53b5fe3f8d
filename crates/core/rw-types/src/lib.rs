//! Core types for ruleweave.
//!
//! This crate provides:
//! - [`EnrichConfig`] / [`CleanConfig`] - pipeline configuration
//! - [`Side`] - which list column of a rule row is being processed
//! - [`EntryAnalysis`] / [`AnalysisMap`] / [`SideAnalysis`] - the per-entry
//!   output model of the enrichment pipeline

mod analysis;
mod config;

pub use analysis::{AnalysisMap, EntryAnalysis, Side, SideAnalysis};
pub use config::{CleanConfig, EnrichConfig};
