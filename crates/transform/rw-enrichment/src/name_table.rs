//! NameTable - identifier to display-name lookups.

use ahash::RandomState;
use hashbrown::HashMap;

/// Second-stage lookup mapping an opaque identifier to its display name.
#[derive(Debug, Default)]
pub struct NameTable {
    data: HashMap<String, String, RandomState>,
}

impl NameTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            data: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Inserts a mapping. Duplicate identifiers are last-write-wins.
    pub fn insert(&mut self, identifier: impl Into<String>, name: impl Into<String>) {
        self.data.insert(identifier.into(), name.into());
    }

    /// Looks up the display name for a trimmed identifier.
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.data.get(identifier.trim()).map(String::as_str)
    }

    /// Returns the number of mappings.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
