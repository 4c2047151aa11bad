//! Token tables mapping design-system keys to literal CSS values.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A mapping from token key to a literal CSS value.
///
/// Tables come in two shapes in theme documents: named palettes
/// (`primary: "#3f51b5"`) and scales written as arrays
/// (`["0px", "8px", ...]`), whose keys are the element indices.
///
/// # Example
///
/// ```rust
/// use tokenstyle::TokenTable;
///
/// let space = TokenTable::from_values(["0px", "8px", "16px"]);
/// assert_eq!(space.get("1"), Some("8px"));
///
/// let colors = TokenTable::new().with("primary", "#000");
/// assert_eq!(colors.get("primary"), Some("#000"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenTable {
    entries: HashMap<String, String>,
}

impl TokenTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scale table keyed by position ("0", "1", ...).
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value.into()))
            .collect();
        Self { entries }
    }

    /// Adds a token, returning the updated table for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Looks up the CSS value for an exact token key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if `key` is a token of this table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    Scale(Vec<TokenValue>),
    Named(HashMap<String, TokenValue>),
}

// Scales in hand-written documents often carry bare numbers (`lineHeights: [1, 1.5]`).
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<TokenValue> for String {
    fn from(value: TokenValue) -> Self {
        match value {
            TokenValue::Text(text) => text,
            TokenValue::Number(number) => number.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for TokenTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match TableDocument::deserialize(deserializer)? {
            TableDocument::Scale(values) => TokenTable::from_values(values),
            TableDocument::Named(entries) => entries.into_iter().collect(),
        })
    }
}
