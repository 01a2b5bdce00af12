//! Backlog model: items, directions and the backlog itself
//!
//! Everything here is plain data. A backlog is built once (either the
//! built-in declaration or a loaded file) and never mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::id::ItemId;

/// Identifiers an item depends on
///
/// Deserializes from either a list of IDs or a single whitespace-separated
/// string:
/// - list: `["SIZE4", "RB4"]`
/// - string: `"SIZE4 RB4"`
///
/// Always serializes as a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies(Vec<ItemId>);

impl Dependencies {
    /// Creates an empty dependency list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a dependency list from a whitespace-separated string
    pub fn parse(list: &str) -> Self {
        Self(ItemId::parse_list(list))
    }

    /// Returns true if there are no dependencies
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of dependencies
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the dependency IDs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter()
    }
}

impl From<Vec<ItemId>> for Dependencies {
    fn from(ids: Vec<ItemId>) -> Self {
        Self(ids)
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Dependencies {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Dependencies {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};

        struct DependenciesVisitor;

        impl<'de> Visitor<'de> for DependenciesVisitor {
            type Value = Dependencies;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a list of item IDs or a space-separated string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Dependencies::parse(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut ids = Vec::new();
                while let Some(id) = seq.next_element::<ItemId>()? {
                    ids.push(id);
                }
                Ok(Dependencies(ids))
            }
        }

        deserializer.deserialize_any(DependenciesVisitor)
    }
}

/// A single backlog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique across the whole backlog by convention
    pub id: ItemId,

    /// Text shown on the node
    pub label: String,

    /// Items that must come before this one
    #[serde(default, skip_serializing_if = "Dependencies::is_empty")]
    pub depends_on: Dependencies,

    /// Completion flag
    #[serde(default)]
    pub done: bool,

    /// Optional size estimate (not drawn)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl Item {
    /// Creates a pending item with no dependencies
    ///
    /// `id` is taken as written; use [`ItemId::from_str`](std::str::FromStr)
    /// for untrusted input.
    pub fn new(id: &str, label: impl Into<String>) -> Self {
        Self {
            id: ItemId::literal(id),
            label: label.into(),
            depends_on: Dependencies::new(),
            done: false,
            size: None,
        }
    }

    /// Sets the dependencies, taking each ID as written
    pub fn depends_on<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.depends_on = ids
            .into_iter()
            .map(|id| ItemId::literal(id.as_ref()))
            .collect::<Vec<_>>()
            .into();
        self
    }

    /// Marks the item as done
    pub fn done(mut self) -> Self {
        self.done = true;
        self
    }

    /// Sets the size estimate
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// A named group of items, drawn as one cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub name: String,

    /// Items in sequence order; consecutive items are chained
    #[serde(default, rename = "item")]
    pub items: Vec<Item>,
}

impl Direction {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Consecutive item pairs, in declaration order
    pub fn sequence(&self) -> impl Iterator<Item = (&Item, &Item)> {
        self.items.iter().zip(self.items.iter().skip(1))
    }
}

/// The ordered list of directions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Backlog {
    #[serde(default, rename = "direction")]
    pub directions: Vec<Direction>,
}

impl Backlog {
    pub fn new(directions: Vec<Direction>) -> Self {
        Self { directions }
    }

    /// Iterates over every item, direction by direction
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.directions.iter().flat_map(|d| d.items.iter())
    }

    /// Finds the first item declared with the given ID
    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items().find(|item| &item.id == id)
    }

    /// Returns the direction an item belongs to
    pub fn direction_of(&self, id: &ItemId) -> Option<&Direction> {
        self.directions
            .iter()
            .find(|d| d.items.iter().any(|item| &item.id == id))
    }

    /// Total number of items
    pub fn len(&self) -> usize {
        self.directions.iter().map(|d| d.items.len()).sum()
    }

    /// Returns true if no direction declares any item
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
