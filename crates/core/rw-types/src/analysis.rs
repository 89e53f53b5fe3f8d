//! Output model of the enrichment pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which list column of a rule row is being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Source,
    Destination,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Metadata resolved for a single IP/subnet token.
///
/// `file` names the reference table the token matched. The remaining fields
/// are copied from the matched row; absent cells stay `None` and serialize
/// as `null` so the output shape is fixed regardless of table coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAnalysis {
    /// Name of the reference table that matched.
    pub file: String,

    pub environment: Option<String>,
    pub function: Option<String>,
    pub location: Option<String>,
    pub infra: Option<String>,

    /// Opaque asset-tracking identifier from the matched row.
    pub identifier: Option<String>,

    /// Display name resolved for `identifier` via the id-name table.
    /// `None` when the identifier is absent or unknown.
    pub identifier_name: Option<String>,
}

/// Per-row, per-side analysis output: trimmed original token -> metadata.
///
/// Ordered map so that serialization is deterministic; running the pipeline
/// twice over the same inputs produces byte-identical analysis columns.
pub type AnalysisMap = BTreeMap<String, EntryAnalysis>;

/// Result of enriching one side of one rule row.
///
/// Tokens that resolved are in `entries`; tokens that did not are only
/// counted, never listed. The counters feed the run statistics.
#[derive(Debug, Clone, Default)]
pub struct SideAnalysis {
    /// Resolved tokens and their metadata.
    pub entries: AnalysisMap,

    /// Syntactically valid tokens absent from every reference table.
    pub unmatched: u64,

    /// Tokens that are not a valid IP address or CIDR network.
    pub unparseable: u64,
}
