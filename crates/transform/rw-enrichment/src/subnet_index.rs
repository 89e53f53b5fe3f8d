//! SubnetTable and LayeredSubnetIndex - priority-ordered subnet lookups.

use crate::AttributeSet;
use ahash::RandomState;
use hashbrown::HashMap;

/// One subnet reference table: exact-string CIDR key to attributes.
#[derive(Debug)]
pub struct SubnetTable {
    /// Maps trimmed CIDR string to its attributes.
    data: HashMap<String, AttributeSet, RandomState>,

    /// Table name reported in analysis output and statistics.
    name: String,
}

impl SubnetTable {
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

    /// Looks up a trimmed CIDR token by exact string match.
    pub fn get(&self, token: &str) -> Option<&AttributeSet> {
        self.data.get(token.trim())
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

/// Ordered collection of subnet tables probed in priority order.
///
/// The first table pushed has the highest priority; a key present in several
/// tables resolves to the first one holding it. Matching is exact-string on
/// the trimmed token - a `/24` token never matches a covering `/16` entry.
#[derive(Debug, Default)]
pub struct LayeredSubnetIndex {
    tables: Vec<SubnetTable>,
}

impl LayeredSubnetIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table at the lowest priority position.
    pub fn push(&mut self, table: SubnetTable) {
        self.tables.push(table);
    }

    /// Probes the tables in priority order.
    ///
    /// Returns the matching table's name alongside the attributes of the
    /// first hit, or `None` when no table holds the key.
    pub fn lookup(&self, token: &str) -> Option<(&str, &AttributeSet)> {
        let token = token.trim();
        for table in &self.tables {
            if let Some(attrs) = table.get(token) {
                return Some((table.name(), attrs));
            }
        }
        None
    }

    /// Returns the tables in priority order.
    pub fn tables(&self) -> &[SubnetTable] {
        &self.tables
    }

    /// Returns the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Returns the total number of entries across all tables.
    pub fn entry_count(&self) -> usize {
        self.tables.iter().map(SubnetTable::len).sum()
    }
}
