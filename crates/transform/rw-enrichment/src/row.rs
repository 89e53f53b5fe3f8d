//! Attribute set carried by one reference-table row.

/// Metadata attributes of a reference entry.
///
/// Every field is optional; an empty cell in the source table stays absent
/// rather than becoming an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    pub environment: Option<String>,
    pub function: Option<String>,
    pub location: Option<String>,
    pub infra: Option<String>,
    pub identifier: Option<String>,
}

impl AttributeSet {
    /// Returns the identifier when it is present and non-blank.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
