//! Lookup tables and token classification for ruleweave enrichment.
//!
//! This crate provides the reconciliation core:
//! - [`classify`] / [`EntryKind`] - decides whether a token is a bare IP, a
//!   host route, a subnet, or unparseable
//! - [`IpTable`] - exact-match lookups for single addresses and host routes
//! - [`LayeredSubnetIndex`] - ordered subnet tables probed by priority
//! - [`NameTable`] - identifier to display-name second-stage lookups
//! - [`Enricher`] - resolves a token list into an [`rw_types::AnalysisMap`]
//!
//! All lookups are exact-string matches on trimmed keys. A `/24` input that
//! is a sub-range of a table's `/16` entry does not match; containment
//! semantics are deliberately out of scope.

mod classify;
mod enricher;
mod ip_table;
mod loader;
mod name_table;
mod row;
mod subnet_index;

pub use classify::{classify, EntryKind};
pub use enricher::Enricher;
pub use ip_table::IpTable;
pub use loader::{load_ip_table, load_name_table, load_subnet_table};
pub use name_table::NameTable;
pub use row::AttributeSet;
pub use subnet_index::{LayeredSubnetIndex, SubnetTable};
