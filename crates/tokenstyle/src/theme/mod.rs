//! Design-token themes.
//!
//! This module provides:
//!
//! - [`Theme`]: The five optional token tables consulted by the resolver
//! - [`TokenTable`]: A key-to-CSS-value mapping
//! - [`PropertyCategory`]: Which table a CSS property draws its values from
//! - [`default_theme`]: The built-in token scales
//!
//! Themes are plain immutable data; building one never touches global state,
//! and [`default_theme`] is constructed once and shared.

mod category;
mod defaults;
mod error;
#[allow(clippy::module_inception)]
mod theme;
mod tokens;

pub use category::PropertyCategory;
pub use defaults::default_theme;
pub use error::ThemeError;
pub use theme::Theme;
pub use tokens::TokenTable;
