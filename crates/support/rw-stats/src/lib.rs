//! Statistics for enrichment runs.
//!
//! [`RunStats`] accumulates per-side counters while rows are processed and
//! yields a serializable [`StatsSnapshot`] at the end of the run. Counters
//! are atomic and the per-table maps are mutex-guarded, so the accumulator
//! can be shared by reference if a caller parallelizes row processing; the
//! totals are plain sums with no ordering requirement. Everything here is
//! observational and never influences the enriched output.

use ahash::RandomState;
use chrono::{DateTime, Duration, Utc};
use hashbrown::HashMap;
use parking_lot::Mutex;
use rw_types::{Side, SideAnalysis};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics collected during a pipeline run.
#[derive(Debug, Default)]
pub struct RunStats {
    /// When the run started
    started_at: Option<DateTime<Utc>>,

    /// When the run completed
    completed_at: Option<DateTime<Utc>>,

    /// Number of rows processed
    rows_processed: AtomicU64,

    source: SideCounters,
    destination: SideCounters,
}

/// Counters for one side (source or destination) of the rule rows.
#[derive(Debug, Default)]
struct SideCounters {
    /// Entries resolved to a reference table
    mapped: AtomicU64,

    /// Mapped entries whose token is a single address or host route
    ips: AtomicU64,

    /// Mapped entries whose token is a real subnet (not `/32` or `/128`)
    subnets: AtomicU64,

    /// Valid tokens absent from every reference table
    unmatched: AtomicU64,

    /// Tokens that failed classification
    unparseable: AtomicU64,

    /// Mapped entries broken down by matched table name
    by_table: Mutex<HashMap<String, u64, RandomState>>,
}

impl SideCounters {
    fn record(&self, analysis: &SideAnalysis) {
        for (token, entry) in &analysis.entries {
            self.mapped.fetch_add(1, Ordering::Relaxed);
            if is_subnet_token(token) {
                self.subnets.fetch_add(1, Ordering::Relaxed);
            } else {
                self.ips.fetch_add(1, Ordering::Relaxed);
            }
            let mut by_table = self.by_table.lock();
            *by_table.entry(entry.file.clone()).or_insert(0) += 1;
        }
        self.unmatched.fetch_add(analysis.unmatched, Ordering::Relaxed);
        self.unparseable
            .fetch_add(analysis.unparseable, Ordering::Relaxed);
    }

    fn snapshot(&self) -> SideSnapshot {
        SideSnapshot {
            mapped: self.mapped.load(Ordering::Relaxed),
            ips: self.ips.load(Ordering::Relaxed),
            subnets: self.subnets.load(Ordering::Relaxed),
            unmatched: self.unmatched.load(Ordering::Relaxed),
            unparseable: self.unparseable.load(Ordering::Relaxed),
            by_table: self
                .by_table
                .lock()
                .iter()
                .map(|(name, count)| (name.clone(), *count))
                .collect(),
        }
    }
}

/// An entry counts as a subnet when its token carries a prefix that is not
/// host-length. Host routes resolve via the IP table and count as IPs.
fn is_subnet_token(token: &str) -> bool {
    token.contains('/') && !token.ends_with("/32") && !token.ends_with("/128")
}

impl RunStats {
    /// Creates a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Marks the run as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Records one processed row.
    pub fn record_row(&self) {
        self.rows_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records the analysis result of one side of one row.
    pub fn record_side(&self, side: Side, analysis: &SideAnalysis) {
        self.side(side).record(analysis);
    }

    /// Returns the number of rows processed.
    pub fn rows_processed(&self) -> u64 {
        self.rows_processed.load(Ordering::Relaxed)
    }

    /// Returns the mapped-entry count for a side.
    pub fn mapped(&self, side: Side) -> u64 {
        self.side(side).mapped.load(Ordering::Relaxed)
    }

    /// Returns the unmatched-token count for a side.
    pub fn unmatched(&self, side: Side) -> u64 {
        self.side(side).unmatched.load(Ordering::Relaxed)
    }

    /// Returns the duration of the run so far, or of the whole run once
    /// [`RunStats::complete`] has been called.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            (Some(start), None) => Some(Utc::now() - start),
            _ => None,
        }
    }

    /// Creates a serializable snapshot of the current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            started_at: self.started_at,
            completed_at: self.completed_at,
            rows_processed: self.rows_processed(),
            source: self.source.snapshot(),
            destination: self.destination.snapshot(),
        }
    }

    fn side(&self, side: Side) -> &SideCounters {
        match side {
            Side::Source => &self.source,
            Side::Destination => &self.destination,
        }
    }
}

/// A serializable snapshot of run statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub rows_processed: u64,
    pub source: SideSnapshot,
    pub destination: SideSnapshot,
}

/// Snapshot of one side's counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideSnapshot {
    pub mapped: u64,
    pub ips: u64,
    pub subnets: u64,
    pub unmatched: u64,
    pub unparseable: u64,

    /// Mapped entries per matched table, ordered by table name.
    pub by_table: BTreeMap<String, u64>,
}

impl StatsSnapshot {
    /// Returns the duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
