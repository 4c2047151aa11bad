//! Theme struct holding the design-token tables.

use serde::{Deserialize, Serialize};

use super::category::PropertyCategory;
use super::error::ThemeError;
use super::tokens::TokenTable;

/// A set of design-token tables consulted when resolving style props.
///
/// Every table is optional: a theme without a `colors` table simply passes
/// color values through unchanged.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{Theme, TokenTable};
///
/// let theme = Theme::new()
///     .with_space(TokenTable::from_values(["0px", "8px", "16px"]))
///     .with_colors(TokenTable::new().with("primary", "#3f51b5"));
///
/// assert!(theme.colors().is_some());
/// assert!(theme.font_sizes().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    space: Option<TokenTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<TokenTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_sizes: Option<TokenTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    letter_spacings: Option<TokenTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_heights: Option<TokenTable>,
}

impl Theme {
    /// Creates a theme with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the space table, returning an updated theme for chaining.
    pub fn with_space(mut self, table: TokenTable) -> Self {
        self.space = Some(table);
        self
    }

    /// Sets the colors table.
    pub fn with_colors(mut self, table: TokenTable) -> Self {
        self.colors = Some(table);
        self
    }

    /// Sets the font sizes table.
    pub fn with_font_sizes(mut self, table: TokenTable) -> Self {
        self.font_sizes = Some(table);
        self
    }

    /// Sets the letter spacings table.
    pub fn with_letter_spacings(mut self, table: TokenTable) -> Self {
        self.letter_spacings = Some(table);
        self
    }

    /// Sets the line heights table.
    pub fn with_line_heights(mut self, table: TokenTable) -> Self {
        self.line_heights = Some(table);
        self
    }

    pub fn space(&self) -> Option<&TokenTable> {
        self.space.as_ref()
    }

    pub fn colors(&self) -> Option<&TokenTable> {
        self.colors.as_ref()
    }

    pub fn font_sizes(&self) -> Option<&TokenTable> {
        self.font_sizes.as_ref()
    }

    pub fn letter_spacings(&self) -> Option<&TokenTable> {
        self.letter_spacings.as_ref()
    }

    pub fn line_heights(&self) -> Option<&TokenTable> {
        self.line_heights.as_ref()
    }

    /// Returns the table that supplies values for `category`, if present.
    pub fn table(&self, category: PropertyCategory) -> Option<&TokenTable> {
        match category {
            PropertyCategory::Space => self.space(),
            PropertyCategory::Color => self.colors(),
            PropertyCategory::FontSize => self.font_sizes(),
            PropertyCategory::LetterSpacing => self.letter_spacings(),
            PropertyCategory::LineHeight => self.line_heights(),
        }
    }

    /// Loads a theme from a YAML document.
    ///
    /// Table names use the camelCase document keys (`space`, `colors`,
    /// `fontSizes`, `letterSpacings`, `lineHeights`); each table is either a
    /// list (a scale keyed by position) or a mapping. Missing tables stay
    /// unset.
    ///
    /// ```rust
    /// use tokenstyle::Theme;
    ///
    /// let theme = Theme::from_yaml(
    ///     r##"
    /// space: [0px, 8px, 16px]
    /// colors:
    ///   primary: "#3f51b5"
    /// "##,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(theme.space().and_then(|t| t.get("2")), Some("16px"));
    /// assert_eq!(theme.colors().and_then(|t| t.get("primary")), Some("#3f51b5"));
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_yaml::from_str(source)?;
        tracing::debug!(tables = theme.table_count(), "loaded theme from yaml");
        Ok(theme)
    }

    /// Loads a theme from a JSON document. See [`Theme::from_yaml`] for the layout.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(source)?;
        tracing::debug!(tables = theme.table_count(), "loaded theme from json");
        Ok(theme)
    }

    fn table_count(&self) -> usize {
        PropertyCategory::ALL
            .iter()
            .filter(|category| self.table(**category).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_new_has_no_tables() {
        let theme = Theme::new();
        for category in PropertyCategory::ALL {
            assert!(theme.table(category).is_none());
        }
    }

    #[test]
    fn test_theme_builders_fill_matching_table() {
        let theme = Theme::new()
            .with_space(TokenTable::from_values(["0px"]))
            .with_colors(TokenTable::new().with("black", "#000"))
            .with_font_sizes(TokenTable::from_values(["12px"]))
            .with_letter_spacings(TokenTable::from_values(["0.06px"]))
            .with_line_heights(TokenTable::from_values(["17px"]));

        assert_eq!(theme.table(PropertyCategory::Space).unwrap().get("0"), Some("0px"));
        assert_eq!(
            theme.table(PropertyCategory::Color).unwrap().get("black"),
            Some("#000")
        );
        assert_eq!(
            theme.table(PropertyCategory::FontSize).unwrap().get("0"),
            Some("12px")
        );
        assert_eq!(
            theme.table(PropertyCategory::LetterSpacing).unwrap().get("0"),
            Some("0.06px")
        );
        assert_eq!(
            theme.table(PropertyCategory::LineHeight).unwrap().get("0"),
            Some("17px")
        );
    }

    #[test]
    fn test_theme_from_yaml_partial() {
        let theme = Theme::from_yaml("fontSizes: [12px, 14px]\n").unwrap();
        assert_eq!(theme.font_sizes().unwrap().get("1"), Some("14px"));
        assert!(theme.space().is_none());
        assert!(theme.colors().is_none());
    }

    #[test]
    fn test_theme_from_yaml_empty_document() {
        let theme = Theme::from_yaml("{}").unwrap();
        assert_eq!(theme, Theme::new());
    }

    #[test]
    fn test_theme_from_json() {
        let theme = Theme::from_json(
            r##"{"colors": {"primary": "#3f51b5"}, "lineHeights": ["17px", "19px"]}"##,
        )
        .unwrap();
        assert_eq!(theme.colors().unwrap().get("primary"), Some("#3f51b5"));
        assert_eq!(theme.line_heights().unwrap().get("1"), Some("19px"));
    }

    #[test]
    fn test_theme_from_yaml_invalid() {
        let err = Theme::from_yaml("space: {nested: [1, 2]}").unwrap_err();
        assert!(matches!(err, ThemeError::Yaml(_)));
    }

    #[test]
    fn test_theme_from_json_invalid() {
        let err = Theme::from_json("{\"colors\": ").unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn test_theme_json_roundtrip_keeps_tables() {
        let theme = Theme::new().with_colors(TokenTable::new().with("white", "#fff"));
        let json = serde_json::to_string(&theme).unwrap();
        assert!(!json.contains("space"));
        assert_eq!(Theme::from_json(&json).unwrap(), theme);
    }
}
