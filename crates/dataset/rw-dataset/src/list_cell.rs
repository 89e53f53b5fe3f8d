//! Parsing of serialized token-list cells.
//!
//! Rule datasets store their IP/subnet lists as a string rendering of a
//! list in a single cell, e.g. `['10.1.1.1', '10.0.0.0/24']` or
//! `["10.1.1.1"]`. The outcome of parsing is an explicit [`ListCell`]
//! value rather than a silently swallowed failure, so callers decide what
//! an invalid cell means (the pipeline treats it as zero entries).

/// Result of parsing one serialized list cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCell {
    /// A well-formed list; may hold zero tokens (`[]`).
    Entries(Vec<String>),

    /// The cell was empty or whitespace.
    Empty,

    /// The cell held something that is not a list rendering.
    Invalid,
}

impl ListCell {
    /// Tokens of the cell; `Empty` and `Invalid` view as zero entries.
    pub fn tokens(&self) -> &[String] {
        match self {
            Self::Entries(tokens) => tokens,
            Self::Empty | Self::Invalid => &[],
        }
    }

    /// Returns true when the cell failed to parse.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Parses a serialized list cell.
///
/// Accepted forms:
/// - a bracketed list of comma-separated items, each single-quoted,
///   double-quoted, or bare: `['a', 'b']`, `["a","b"]`, `[a, b]`, `[]`
/// - a quoted scalar, treated as a one-entry list: `'10.1.1.1'`
/// - empty/whitespace, yielding [`ListCell::Empty`]
///
/// Anything else (unbracketed text, an unterminated bracket, unbalanced
/// quotes) yields [`ListCell::Invalid`].
pub fn parse_list_cell(raw: &str) -> ListCell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ListCell::Empty;
    }

    if let Some(inner) = trimmed.strip_prefix('[') {
        return match inner.strip_suffix(']') {
            Some(inner) => parse_items(inner),
            None => ListCell::Invalid,
        };
    }

    if let Some(scalar) = strip_quotes(trimmed) {
        let scalar = scalar.trim();
        return if scalar.is_empty() {
            ListCell::Entries(Vec::new())
        } else {
            ListCell::Entries(vec![scalar.to_string()])
        };
    }

    ListCell::Invalid
}

/// Splits the bracket interior on commas, honoring quote pairs.
fn parse_items(inner: &str) -> ListCell {
    if inner.trim().is_empty() {
        return ListCell::Entries(Vec::new());
    }

    let mut items: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in inner.chars() {
        match quote {
            Some(open) => {
                if ch == open {
                    quote = None;
                }
                current.push(ch);
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    current.push(ch);
                }
                ',' => items.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            },
        }
    }
    if quote.is_some() {
        return ListCell::Invalid;
    }
    items.push(current);

    let mut tokens = Vec::new();
    for item in items {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        match strip_quotes(item) {
            Some(unquoted) => {
                let unquoted = unquoted.trim();
                if !unquoted.is_empty() {
                    tokens.push(unquoted.to_string());
                }
            }
            None => {
                // A stray quote in a bare item means the rendering is broken.
                if item.contains('\'') || item.contains('"') {
                    return ListCell::Invalid;
                }
                tokens.push(item.to_string());
            }
        }
    }

    ListCell::Entries(tokens)
}

/// Strips one matching pair of surrounding quotes, if present.
fn strip_quotes(s: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return Some(&s[1..s.len() - 1]);
        }
    }
    None
}
