//! Pipeline orchestration for ruleweave.
//!
//! Two linear batch pipelines over a rule dataset:
//! - [`enrich`] - resolve IP/subnet tokens against the reference tables and
//!   append one analysis column per side
//! - [`clean`] - fold IP-shaped group entries into the IP columns and drop
//!   address-range entries
//!
//! Both pipelines are fail-before-write: every fatal check happens before
//! the output file is opened, and all row processing completes in memory
//! first.

pub mod clean;
pub mod enrich;

mod progress;

pub use clean::CleanSummary;
pub use progress::Progress;
