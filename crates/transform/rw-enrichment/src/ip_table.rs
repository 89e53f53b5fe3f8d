//! IpTable - O(1) exact-match lookup table for single addresses.

use crate::AttributeSet;
use ahash::RandomState;
use hashbrown::HashMap;

/// Exact-match lookup table keyed by single-IP strings.
///
/// Host-route tokens collapse to their bare address before lookup, so
/// `10.1.1.1/32` and `10.1.1.1` resolve to the same entry. Keys are matched
/// as trimmed exact strings; two spellings of one address are two keys.
#[derive(Debug)]
pub struct IpTable {
    /// Maps trimmed address string to its attributes.
    data: HashMap<String, AttributeSet, RandomState>,

    /// Table name reported in analysis output and statistics.
    name: String,
}

impl IpTable {
    /// Creates a new empty table with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: HashMap::with_hasher(RandomState::new()),
            name: name.into(),
        }
    }

    /// Inserts an entry. Duplicate keys are last-write-wins.
    pub fn insert(&mut self, key: impl Into<String>, attrs: AttributeSet) {
        self.data.insert(key.into(), attrs);
    }

    /// Looks up a single-IP or host-route token.
    ///
    /// A trailing `/32` or `/128` is stripped before the exact-match probe.
    pub fn lookup(&self, token: &str) -> Option<&AttributeSet> {
        let token = token.trim();
        let bare = token
            .strip_suffix("/32")
            .or_else(|| token.strip_suffix("/128"))
            .unwrap_or(token);
        self.data.get(bare.trim())
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
