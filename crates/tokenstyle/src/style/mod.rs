//! Responsive style props and their resolution into CSS.
//!
//! This module provides:
//!
//! - [`StyleProp`] and [`Responsive`]: A value, or values per breakpoint [`Slot`]
//! - [`to_prop_value`]: Resolves one property into CSS declarations
//! - [`to_theme_value_if_needed`]: Substitutes theme tokens for raw values
//! - [`Declarations`]: Collects several resolved props into one block
//!
//! Resolution is a pure function of the prop, the theme and the fixed
//! [`BREAKPOINTS`] table. It has no error path: values that are not theme
//! tokens are emitted unchanged.

mod declarations;
mod resolve;
mod responsive;

pub use declarations::Declarations;
pub use resolve::{to_prop_value, to_theme_value_if_needed};
pub use responsive::{Responsive, Slot, StyleProp, BREAKPOINTS};
