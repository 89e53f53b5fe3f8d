//! Shared utilities for ruleweave CLI binaries.
//!
//! This crate provides common functionality shared between `rw-enrich`
//! and `rw-clean`.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::format_number;
pub use logging::init_logging;
