//! Style prop resolution into CSS declarations.
//!
//! [`to_prop_value`] turns one CSS property and its [`StyleProp`] into CSS
//! text:
//!
//! - a scalar becomes a single declaration, `margin: 8px;`
//! - a `base` slot becomes the same plain declaration
//! - a breakpoint slot is wrapped in a min-width media query,
//!   `@media screen and (min-width: 768px) {margin: 16px;}`
//!
//! Responsive fragments are joined with `\n` in slot insertion order.
//!
//! Values are looked up in the theme table matching the property's
//! [`PropertyCategory`]; a value that is not a token key of that table is
//! emitted unchanged.

use std::fmt::Display;

use super::responsive::{Slot, StyleProp};
use crate::theme::{PropertyCategory, Theme};

/// Resolves a style prop into CSS text for `property`.
///
/// Returns `None` when the prop is absent, including a responsive prop with
/// no slots set.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{to_prop_value, default_theme, Responsive, StyleProp};
///
/// let margin: StyleProp<u32> = StyleProp::Responsive(Responsive::new().base(1u32).md(2u32));
/// let css = to_prop_value("margin", Some(&margin), Some(default_theme()));
///
/// assert_eq!(
///     css.as_deref(),
///     Some("margin: 8px;\n@media screen and (min-width: 768px) {margin: 16px;}")
/// );
/// ```
pub fn to_prop_value<T: Display>(
    property: &str,
    prop: Option<&StyleProp<T>>,
    theme: Option<&Theme>,
) -> Option<String> {
    match prop? {
        StyleProp::Responsive(responsive) if responsive.is_empty() => None,
        StyleProp::Responsive(responsive) => {
            let fragments: Vec<String> = responsive
                .iter()
                .map(|(slot, value)| slot_declaration(property, slot, value, theme))
                .collect();
            Some(fragments.join("\n"))
        }
        StyleProp::Value(value) => Some(declaration(property, value, theme)),
    }
}

/// Resolves a raw value through the theme table for `property`'s category.
///
/// ```rust
/// use tokenstyle::{to_theme_value_if_needed, Theme, TokenTable};
///
/// let theme = Theme::new().with_colors(TokenTable::new().with("primary", "#000"));
///
/// assert_eq!(to_theme_value_if_needed("color", &"primary", Some(&theme)), "#000");
/// assert_eq!(to_theme_value_if_needed("color", &"accent", Some(&theme)), "accent");
/// // Only the table for the property's own category is consulted.
/// assert_eq!(to_theme_value_if_needed("border-color", &"primary", Some(&theme)), "primary");
/// ```
pub fn to_theme_value_if_needed<T: Display + ?Sized>(
    property: &str,
    value: &T,
    theme: Option<&Theme>,
) -> String {
    let raw = value.to_string();
    let token = PropertyCategory::of(property)
        .and_then(|category| theme?.table(category))
        .and_then(|table| table.get(&raw));

    match token {
        Some(resolved) => resolved.to_string(),
        None => raw,
    }
}

fn declaration<T: Display>(property: &str, value: &T, theme: Option<&Theme>) -> String {
    format!(
        "{}: {};",
        property,
        to_theme_value_if_needed(property, value, theme)
    )
}

fn slot_declaration<T: Display>(
    property: &str,
    slot: Slot,
    value: &T,
    theme: Option<&Theme>,
) -> String {
    let style = declaration(property, value, theme);
    match slot.breakpoint() {
        Some(min_width) => format!("@media screen and (min-width: {}) {{{}}}", min_width, style),
        None => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Responsive;
    use crate::theme::{default_theme, TokenTable};

    fn color_theme() -> Theme {
        Theme::new().with_colors(TokenTable::new().with("primary", "#000"))
    }

    #[test]
    fn absent_prop_resolves_to_none() {
        let prop: Option<&StyleProp<String>> = None;
        assert_eq!(to_prop_value("margin", prop, Some(default_theme())), None);
        assert_eq!(to_prop_value("margin", prop, None), None);
    }

    #[test]
    fn scalar_without_theme_passes_through() {
        let prop = StyleProp::from("2");
        assert_eq!(
            to_prop_value("margin", Some(&prop), None).as_deref(),
            Some("margin: 2;")
        );
    }

    #[test]
    fn scalar_uses_space_table() {
        let prop = StyleProp::Value(2);
        assert_eq!(
            to_prop_value("padding-left", Some(&prop), Some(default_theme())).as_deref(),
            Some("padding-left: 16px;")
        );
    }

    #[test]
    fn scalar_unknown_property_never_substitutes() {
        let prop = StyleProp::Value(2);
        assert_eq!(
            to_prop_value("width", Some(&prop), Some(default_theme())).as_deref(),
            Some("width: 2;")
        );
    }

    #[test]
    fn color_token_substitution() {
        let theme = color_theme();
        let prop = StyleProp::from("primary");
        assert_eq!(
            to_prop_value("color", Some(&prop), Some(&theme)).as_deref(),
            Some("color: #000;")
        );
        assert_eq!(
            to_prop_value("background-color", Some(&prop), Some(&theme)).as_deref(),
            Some("background-color: #000;")
        );
    }

    #[test]
    fn missing_color_token_passes_through() {
        let theme = Theme::new().with_colors(TokenTable::new().with("white", "#fff"));
        let prop = StyleProp::from("primary");
        assert_eq!(
            to_prop_value("color", Some(&prop), Some(&theme)).as_deref(),
            Some("color: primary;")
        );
    }

    #[test]
    fn missing_table_passes_through() {
        let theme = color_theme();
        let prop = StyleProp::Value(1);
        assert_eq!(
            to_prop_value("font-size", Some(&prop), Some(&theme)).as_deref(),
            Some("font-size: 1;")
        );
    }

    #[test]
    fn each_category_uses_its_own_table() {
        let theme = default_theme();
        let prop = StyleProp::Value(0);
        let cases = [
            ("margin", "margin: 0px;"),
            ("font-size", "font-size: 12px;"),
            ("letter-spacing", "letter-spacing: 0.06px;"),
            ("line-height", "line-height: 17px;"),
        ];
        for (property, expected) in cases {
            assert_eq!(
                to_prop_value(property, Some(&prop), Some(theme)).as_deref(),
                Some(expected)
            );
        }
    }

    #[test]
    fn base_only_matches_scalar() {
        let responsive: StyleProp<String> = StyleProp::Responsive(Responsive::new().base("2"));
        let scalar = StyleProp::from("2");
        let theme = default_theme();
        assert_eq!(
            to_prop_value("margin", Some(&responsive), Some(theme)),
            to_prop_value("margin", Some(&scalar), Some(theme))
        );
        assert!(!to_prop_value("margin", Some(&responsive), Some(theme))
            .unwrap()
            .contains("@media"));
    }

    #[test]
    fn breakpoint_slot_wraps_in_media_query() {
        let prop: StyleProp<String> = StyleProp::Responsive(Responsive::new().sm("16px"));
        let theme = Theme::new().with_font_sizes(TokenTable::from_values(["12px"]));
        assert_eq!(
            to_prop_value("font-size", Some(&prop), Some(&theme)).as_deref(),
            Some("@media screen and (min-width: 640px) {font-size: 16px;}")
        );
    }

    #[test]
    fn every_breakpoint_width() {
        let prop: StyleProp<String> =
            StyleProp::Responsive(Responsive::new().sm("a").md("b").lg("c").xl("d"));
        let css = to_prop_value("display", Some(&prop), None).unwrap();
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(
            lines,
            vec![
                "@media screen and (min-width: 640px) {display: a;}",
                "@media screen and (min-width: 768px) {display: b;}",
                "@media screen and (min-width: 1024px) {display: c;}",
                "@media screen and (min-width: 1280px) {display: d;}",
            ]
        );
    }

    #[test]
    fn responsive_follows_insertion_order() {
        let prop: StyleProp<u32> = StyleProp::Responsive(Responsive::new().lg(3u32).base(1u32));
        assert_eq!(
            to_prop_value("padding", Some(&prop), Some(default_theme())).as_deref(),
            Some("@media screen and (min-width: 1024px) {padding: 32px;}\npadding: 8px;")
        );
    }

    #[test]
    fn empty_responsive_resolves_to_none() {
        let prop: StyleProp<String> = StyleProp::Responsive(Responsive::new());
        assert_eq!(to_prop_value("margin", Some(&prop), Some(default_theme())), None);
    }

    #[test]
    fn theme_value_with_numeric_and_str_values() {
        let theme = default_theme();
        assert_eq!(to_theme_value_if_needed("margin", &3, Some(theme)), "32px");
        assert_eq!(to_theme_value_if_needed("margin", "3", Some(theme)), "32px");
        assert_eq!(to_theme_value_if_needed("margin", "auto", Some(theme)), "auto");
        assert_eq!(to_theme_value_if_needed("margin", &3, None), "3");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::style::Responsive;
    use crate::theme::default_theme;
    use proptest::prelude::*;

    const PROPERTIES: &[&str] = &[
        "margin",
        "padding-top",
        "color",
        "background-color",
        "font-size",
        "letter-spacing",
        "line-height",
        "display",
        "width",
    ];

    proptest! {
        #[test]
        fn scalar_is_single_declaration(
            index in 0usize..PROPERTIES.len(),
            value in "[a-z0-9#.]{0,8}",
        ) {
            let property = PROPERTIES[index];
            let prop = StyleProp::Value(value.clone());
            let expected = format!(
                "{}: {};",
                property,
                to_theme_value_if_needed(property, &value, Some(default_theme()))
            );
            prop_assert_eq!(
                to_prop_value(property, Some(&prop), Some(default_theme())),
                Some(expected)
            );
        }

        #[test]
        fn responsive_emits_one_fragment_per_slot(
            slots in prop::collection::vec(0usize..5, 1..10),
            value in "[a-z0-9]{1,6}",
        ) {
            let mut responsive = Responsive::new();
            for index in &slots {
                responsive.set(Slot::ALL[*index], value.clone());
            }
            let expected_media = responsive
                .iter()
                .filter(|(slot, _)| *slot != Slot::Base)
                .count();
            let expected_len = responsive.len();

            let prop = StyleProp::Responsive(responsive);
            let css = to_prop_value("display", Some(&prop), None).unwrap();

            prop_assert_eq!(css.lines().count(), expected_len);
            prop_assert_eq!(css.matches("@media").count(), expected_media);
        }

        #[test]
        fn values_outside_tables_pass_through(value in "[a-z]{1,8}") {
            // Default tables only use numeric keys or camelCase color names.
            prop_assume!(default_theme().colors().map_or(true, |t| !t.contains_key(&value)));
            for property in PROPERTIES {
                prop_assert_eq!(
                    to_theme_value_if_needed(property, &value, Some(default_theme())),
                    value.clone()
                );
            }
        }
    }
}
