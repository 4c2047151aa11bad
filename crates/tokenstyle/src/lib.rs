//! # Tokenstyle - Design Tokens to CSS
//!
//! `tokenstyle` turns style props into CSS declaration text using a
//! design-token [`Theme`], and carries the small piece of global UI state
//! (the loading spinner) that screens share.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Five optional token tables (space, colors, font sizes,
//!   letter spacings, line heights), loaded in code, YAML or JSON
//! - [`StyleProp`]: A single value or a [`Responsive`] set keyed by
//!   breakpoint [`Slot`]
//! - [`to_prop_value`]: Resolves one property into declarations and
//!   min-width media queries
//! - [`GlobalSpinner`]: A shared flag split into read ([`SpinnerState`]) and
//!   write ([`SpinnerActions`]) capabilities
//!
//! ## Quick Start
//!
//! ```rust
//! use tokenstyle::{default_theme, to_prop_value, Responsive, StyleProp};
//!
//! let padding: StyleProp<u32> = StyleProp::Responsive(Responsive::new().base(1u32).lg(3u32));
//! let css = to_prop_value("padding", Some(&padding), Some(default_theme())).unwrap();
//!
//! assert_eq!(
//!     css,
//!     "padding: 8px;\n@media screen and (min-width: 1024px) {padding: 32px;}"
//! );
//! ```
//!
//! ## Theme Tokens
//!
//! A value is replaced only when the property belongs to a
//! [`PropertyCategory`], the theme has that category's table, and the value
//! is an exact key of it. Everything else passes through:
//!
//! ```rust
//! use tokenstyle::{to_prop_value, StyleProp, Theme, TokenTable};
//!
//! let theme = Theme::new().with_colors(TokenTable::new().with("primary", "#000"));
//!
//! let known = StyleProp::from("primary");
//! let unknown = StyleProp::from("rebeccapurple");
//! assert_eq!(to_prop_value("color", Some(&known), Some(&theme)).unwrap(), "color: #000;");
//! assert_eq!(
//!     to_prop_value("color", Some(&unknown), Some(&theme)).unwrap(),
//!     "color: rebeccapurple;"
//! );
//! ```

pub mod spinner;
pub mod style;
pub mod theme;

pub use spinner::{GlobalSpinner, SpinnerActions, SpinnerGuard, SpinnerState, Subscription};
pub use style::{
    to_prop_value, to_theme_value_if_needed, Declarations, Responsive, Slot, StyleProp,
    BREAKPOINTS,
};
pub use theme::{default_theme, PropertyCategory, Theme, ThemeError, TokenTable};
