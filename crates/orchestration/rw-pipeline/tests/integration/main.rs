//! Integration tests for the ruleweave pipelines.
//!
//! Every test builds its fixture CSVs in a private temp directory and runs
//! the pipeline end to end through the public API.

mod common;

mod clean_test;
mod enrich_test;
