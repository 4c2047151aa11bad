//! Responsive style props.
//!
//! A [`StyleProp`] is either a single value or a [`Responsive`] set of
//! values keyed by [`Slot`]. Slots keep the order they were first set in,
//! and that order is the order the resolver emits declarations in.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Breakpoint thresholds, as `(slot name, min-width)`.
pub const BREAKPOINTS: [(&str, &str); 4] = [
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
];

/// A named position in a responsive prop: the default value or one of the
/// four viewport breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Applies at every width.
    Base,
    /// 640px and wider.
    Sm,
    /// 768px and wider.
    Md,
    /// 1024px and wider.
    Lg,
    /// 1280px and wider.
    Xl,
}

impl Slot {
    /// Every slot, from the base value up to the widest breakpoint.
    pub const ALL: [Slot; 5] = [Slot::Base, Slot::Sm, Slot::Md, Slot::Lg, Slot::Xl];

    /// The slot's key in prop documents.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Base => "base",
            Slot::Sm => "sm",
            Slot::Md => "md",
            Slot::Lg => "lg",
            Slot::Xl => "xl",
        }
    }

    /// Parses a slot key. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Slot::ALL.into_iter().find(|slot| slot.name() == name)
    }

    /// The minimum viewport width at which this slot applies, or `None`
    /// for [`Slot::Base`].
    pub fn breakpoint(self) -> Option<&'static str> {
        BREAKPOINTS
            .iter()
            .find(|(name, _)| *name == self.name())
            .map(|(_, width)| *width)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-breakpoint values for a single CSS property.
///
/// # Example
///
/// ```rust
/// use tokenstyle::{Responsive, Slot};
///
/// let padding: Responsive<String> = Responsive::new().base("1").md("2").sm("1");
/// let order: Vec<Slot> = padding.iter().map(|(slot, _)| slot).collect();
/// assert_eq!(order, vec![Slot::Base, Slot::Md, Slot::Sm]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responsive<T> {
    slots: Vec<(Slot, T)>,
}

impl<T> Responsive<T> {
    /// Creates a responsive value with no slots set.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn base(self, value: impl Into<T>) -> Self {
        self.with(Slot::Base, value.into())
    }

    pub fn sm(self, value: impl Into<T>) -> Self {
        self.with(Slot::Sm, value.into())
    }

    pub fn md(self, value: impl Into<T>) -> Self {
        self.with(Slot::Md, value.into())
    }

    pub fn lg(self, value: impl Into<T>) -> Self {
        self.with(Slot::Lg, value.into())
    }

    pub fn xl(self, value: impl Into<T>) -> Self {
        self.with(Slot::Xl, value.into())
    }

    /// Sets a slot, returning the updated value for chaining.
    pub fn with(mut self, slot: Slot, value: T) -> Self {
        self.set(slot, value);
        self
    }

    /// Sets a slot. A slot that is already set keeps its position.
    pub fn set(&mut self, slot: Slot, value: T) {
        match self.slots.iter_mut().find(|(existing, _)| *existing == slot) {
            Some((_, current)) => *current = value,
            None => self.slots.push((slot, value)),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&T> {
        self.slots
            .iter()
            .find(|(existing, _)| *existing == slot)
            .map(|(_, value)| value)
    }

    /// Iterates set slots in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        self.slots.iter().map(|(slot, value)| (*slot, value))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slot is set. An empty responsive value resolves
    /// like an absent prop.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for Responsive<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for Responsive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (slot, value) in &self.slots {
            map.serialize_entry(slot.name(), value)?;
        }
        map.end()
    }
}

struct ResponsiveVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ResponsiveVisitor<T> {
    type Value = Responsive<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of responsive slots (base, sm, md, lg, xl)")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut responsive = Responsive::new();
        while let Some(key) = access.next_key::<String>()? {
            match Slot::from_name(&key) {
                Some(slot) => {
                    // A null slot counts as unset.
                    if let Some(value) = access.next_value::<Option<T>>()? {
                        responsive.set(slot, value);
                    }
                }
                None => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(responsive)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Responsive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResponsiveVisitor(PhantomData))
    }
}

/// A style prop: one value for every width, or a [`Responsive`] set.
///
/// In documents a prop is written either as a scalar (`"8px"`) or as a map
/// of slots (`{"base": "8px", "md": "16px"}`); keys other than the five slot
/// names are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StyleProp<T> {
    Value(T),
    Responsive(Responsive<T>),
}

impl<T> StyleProp<T> {
    /// Returns true for a responsive prop with at least one slot set.
    pub fn is_responsive(&self) -> bool {
        matches!(self, StyleProp::Responsive(responsive) if !responsive.is_empty())
    }
}

impl<T> From<Responsive<T>> for StyleProp<T> {
    fn from(responsive: Responsive<T>) -> Self {
        StyleProp::Responsive(responsive)
    }
}

impl From<&str> for StyleProp<String> {
    fn from(value: &str) -> Self {
        StyleProp::Value(value.to_string())
    }
}

impl From<String> for StyleProp<String> {
    fn from(value: String) -> Self {
        StyleProp::Value(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StylePropDocument<T> {
    Responsive(Responsive<T>),
    Value(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StyleProp<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StylePropDocument::deserialize(deserializer) {
            Ok(StylePropDocument::Responsive(responsive)) => Ok(StyleProp::Responsive(responsive)),
            Ok(StylePropDocument::Value(value)) => Ok(StyleProp::Value(value)),
            Err(_) => Err(de::Error::custom(format_args!(
                "expected a style value of type `{}` or a map of responsive slots",
                std::any::type_name::<T>()
            ))),
        }
    }
}
