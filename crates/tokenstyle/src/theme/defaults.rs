//! The application's built-in design tokens.

use once_cell::sync::Lazy;

use super::theme::Theme;
use super::tokens::TokenTable;

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .with_space(TokenTable::from_values([
            "0px", "8px", "16px", "32px", "64px",
        ]))
        .with_font_sizes(TokenTable::from_values([
            "12px", "14px", "16px", "20px", "24px", "32px",
        ]))
        .with_letter_spacings(TokenTable::from_values([
            "0.06px", "0.07px", "0.08px", "0.09px", "0.1px", "0.15px",
        ]))
        .with_line_heights(TokenTable::from_values([
            "17px", "19px", "22px", "26px", "28px", "37px", "43px",
        ]))
        .with_colors(
            [
                ("primary", "#3f51b5"),
                ("primaryDark", "#2c387e"),
                ("primaryLight", "#6573c3"),
                ("secondary", "#f50057"),
                ("secondaryDark", "#ab003c"),
                ("secondaryLight", "#f73378"),
                ("border", "#cdced2"),
                ("danger", "#ed1c24"),
                ("dangerLight", "#f4655f"),
                ("white", "#fff"),
                ("black", "#000"),
                ("text", "#000"),
                ("gray", "#f5f5f5"),
            ]
            .into_iter()
            .collect(),
        )
});

/// Returns the built-in theme.
///
/// The theme is built on first use and shared for the rest of the process.
///
/// ```rust
/// use tokenstyle::default_theme;
///
/// let theme = default_theme();
/// assert_eq!(theme.space().and_then(|t| t.get("2")), Some("16px"));
/// assert_eq!(theme.colors().and_then(|t| t.get("primary")), Some("#3f51b5"));
/// ```
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::PropertyCategory;

    #[test]
    fn test_default_theme_has_every_table() {
        for category in PropertyCategory::ALL {
            assert!(default_theme().table(category).is_some(), "{:?}", category);
        }
    }

    #[test]
    fn test_default_theme_scales() {
        let theme = default_theme();
        assert_eq!(theme.space().unwrap().len(), 5);
        assert_eq!(theme.font_sizes().unwrap().get("5"), Some("32px"));
        assert_eq!(theme.letter_spacings().unwrap().get("4"), Some("0.1px"));
        assert_eq!(theme.line_heights().unwrap().get("6"), Some("43px"));
        assert_eq!(theme.colors().unwrap().len(), 13);
    }

    #[test]
    fn test_default_theme_is_shared() {
        assert!(std::ptr::eq(default_theme(), default_theme()));
    }
}
