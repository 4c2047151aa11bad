//! CSS property categories and the token table each one draws from.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The token table a CSS property takes its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyCategory {
    /// Margins and paddings, from the `space` table.
    Space,
    /// Foreground and background colors, from the `colors` table.
    Color,
    /// `font-size`, from the `fontSizes` table.
    FontSize,
    /// `letter-spacing`, from the `letterSpacings` table.
    LetterSpacing,
    /// `line-height`, from the `lineHeights` table.
    LineHeight,
}

/// Category sets in lookup priority order.
const CATEGORY_SETS: &[(PropertyCategory, &[&str])] = &[
    (
        PropertyCategory::Space,
        &[
            "margin",
            "margin-top",
            "margin-left",
            "margin-bottom",
            "margin-right",
            "padding",
            "padding-top",
            "padding-left",
            "padding-bottom",
            "padding-right",
        ],
    ),
    (PropertyCategory::Color, &["color", "background-color"]),
    (PropertyCategory::FontSize, &["font-size"]),
    (PropertyCategory::LetterSpacing, &["letter-spacing"]),
    (PropertyCategory::LineHeight, &["line-height"]),
];

// A property listed in more than one set keeps its earliest category.
static CATEGORY_INDEX: Lazy<HashMap<&'static str, PropertyCategory>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (category, properties) in CATEGORY_SETS {
        for property in *properties {
            index.entry(*property).or_insert(*category);
        }
    }
    index
});

impl PropertyCategory {
    /// All categories, in lookup priority order.
    pub const ALL: [PropertyCategory; 5] = [
        PropertyCategory::Space,
        PropertyCategory::Color,
        PropertyCategory::FontSize,
        PropertyCategory::LetterSpacing,
        PropertyCategory::LineHeight,
    ];

    /// Returns the category of a CSS property, or `None` for properties
    /// that never take theme values.
    ///
    /// ```rust
    /// use tokenstyle::PropertyCategory;
    ///
    /// assert_eq!(PropertyCategory::of("padding-top"), Some(PropertyCategory::Space));
    /// assert_eq!(PropertyCategory::of("background-color"), Some(PropertyCategory::Color));
    /// assert_eq!(PropertyCategory::of("display"), None);
    /// ```
    pub fn of(property: &str) -> Option<Self> {
        CATEGORY_INDEX.get(property).copied()
    }

    /// The CSS properties belonging to this category.
    pub fn properties(self) -> &'static [&'static str] {
        CATEGORY_SETS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, properties)| *properties)
            .unwrap_or(&[])
    }
}
