//! Declaration blocks built from several style props.

use std::fmt;

use super::resolve::to_prop_value;
use super::responsive::StyleProp;
use crate::theme::Theme;

/// A block of CSS declarations resolved against one theme.
///
/// Each [`prop`](Declarations::prop) call resolves immediately; absent props
/// add nothing. The block renders its parts joined by newlines.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{default_theme, Declarations, Responsive, StyleProp};
///
/// let margin: StyleProp<u32> = StyleProp::Responsive(Responsive::new().base(0u32).md(1u32));
/// let color = StyleProp::from("primary");
/// let width: Option<StyleProp<String>> = None;
///
/// let css = Declarations::new(Some(default_theme()))
///     .raw("display: flex;")
///     .prop("margin", Some(&margin))
///     .prop("color", Some(&color))
///     .prop("width", width.as_ref())
///     .to_css();
///
/// assert_eq!(
///     css,
///     "display: flex;\nmargin: 0px;\n@media screen and (min-width: 768px) {margin: 8px;}\ncolor: #3f51b5;"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Declarations<'t> {
    theme: Option<&'t Theme>,
    parts: Vec<String>,
}

impl<'t> Declarations<'t> {
    /// Creates an empty block resolving against `theme`.
    pub fn new(theme: Option<&'t Theme>) -> Self {
        Self {
            theme,
            parts: Vec::new(),
        }
    }

    /// Resolves and appends a style prop.
    pub fn prop<T: fmt::Display>(mut self, property: &str, prop: Option<&StyleProp<T>>) -> Self {
        if let Some(css) = to_prop_value(property, prop, self.theme) {
            self.parts.push(css);
        }
        self
    }

    /// Appends literal CSS text as-is.
    pub fn raw(mut self, css: impl Into<String>) -> Self {
        self.parts.push(css.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Renders the block.
    pub fn to_css(&self) -> String {
        self.parts.join("\n")
    }
}

impl fmt::Display for Declarations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
