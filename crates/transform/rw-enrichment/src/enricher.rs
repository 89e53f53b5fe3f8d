//! Record enricher - resolves token lists against the lookup tables.

use crate::{classify, AttributeSet, EntryKind, IpTable, LayeredSubnetIndex, NameTable};
use rw_types::{EntryAnalysis, SideAnalysis};

/// Resolves IP/subnet tokens through the layered lookup tables.
///
/// The tables are built once and never mutated afterwards, so one enricher
/// can be shared freely across rows (and threads, if a caller chooses to
/// parallelize).
#[derive(Debug)]
pub struct Enricher {
    ip_table: IpTable,
    subnet_index: LayeredSubnetIndex,
    names: NameTable,
}

impl Enricher {
    /// Creates an enricher over fully loaded tables.
    pub fn new(ip_table: IpTable, subnet_index: LayeredSubnetIndex, names: NameTable) -> Self {
        Self {
            ip_table,
            subnet_index,
            names,
        }
    }

    /// Enriches one side of one rule row.
    ///
    /// Each token is trimmed, classified, and resolved: single IPs and host
    /// routes against the IP table, subnets through the subnet tables in
    /// priority order. Resolved tokens land in the returned map keyed by
    /// their trimmed original spelling; unresolved and unparseable tokens
    /// are only counted. Blank tokens are ignored outright.
    pub fn enrich(&self, tokens: &[String]) -> SideAnalysis {
        let mut analysis = SideAnalysis::default();

        for raw in tokens {
            let token = raw.trim();
            if token.is_empty() {
                continue;
            }

            match classify(token) {
                EntryKind::Unparseable => analysis.unparseable += 1,
                EntryKind::SingleIp | EntryKind::HostRoute => match self.ip_table.lookup(token) {
                    Some(attrs) => {
                        analysis
                            .entries
                            .insert(token.to_string(), self.build_entry(self.ip_table.name(), attrs));
                    }
                    None => analysis.unmatched += 1,
                },
                EntryKind::Subnet => match self.subnet_index.lookup(token) {
                    Some((table, attrs)) => {
                        analysis
                            .entries
                            .insert(token.to_string(), self.build_entry(table, attrs));
                    }
                    None => analysis.unmatched += 1,
                },
            }
        }

        analysis
    }

    /// Returns the IP table.
    pub fn ip_table(&self) -> &IpTable {
        &self.ip_table
    }

    /// Returns the subnet index.
    pub fn subnet_index(&self) -> &LayeredSubnetIndex {
        &self.subnet_index
    }

    /// Returns the id-name table.
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    fn build_entry(&self, table: &str, attrs: &AttributeSet) -> EntryAnalysis {
        let identifier_name = attrs
            .identifier()
            .and_then(|id| self.names.get(id))
            .map(str::to_string);

        EntryAnalysis {
            file: table.to_string(),
            environment: attrs.environment.clone(),
            function: attrs.function.clone(),
            location: attrs.location.clone(),
            infra: attrs.infra.clone(),
            identifier: attrs.identifier.clone(),
            identifier_name,
        }
    }
}
