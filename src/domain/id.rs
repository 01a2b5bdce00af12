//! Item identifiers
//!
//! An item ID is a short human-written token such as `RB1` or `PACKAGE0`.
//! It must be non-empty and contain no whitespace, because dependency
//! lists in the legacy declaration syntax are whitespace-separated.
//! Uniqueness across a backlog is a convention, checked only on request
//! (see [`BacklogGraph::validate`](super::BacklogGraph::validate)).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Item ID must not be empty")]
    Empty,

    #[error("Invalid item ID '{0}': whitespace is not allowed")]
    Whitespace(String),
}

/// Identifier of a backlog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Wraps a literal from a source declaration without validation
    pub(crate) fn literal(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits a whitespace-separated dependency list into IDs.
    ///
    /// Empty fragments are skipped, so `""` and `"  "` yield no IDs.
    pub fn parse_list(list: &str) -> Vec<ItemId> {
        list.split_whitespace()
            .map(|token| ItemId(token.to_string()))
            .collect()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(IdError::Whitespace(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ItemId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_id() {
        let id: ItemId = "RB1".parse().unwrap();
        assert_eq!(id.as_str(), "RB1");
        assert_eq!(id.to_string(), "RB1");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let id: ItemId = "  CI4 ".parse().unwrap();
        assert_eq!(id, "CI4");
    }

    #[test]
    fn reject_empty_id() {
        assert_eq!("".parse::<ItemId>(), Err(IdError::Empty));
        assert_eq!("   ".parse::<ItemId>(), Err(IdError::Empty));
    }

    #[test]
    fn reject_inner_whitespace() {
        assert!(matches!(
            "SIZE4 RB4".parse::<ItemId>(),
            Err(IdError::Whitespace(_))
        ));
    }

    #[test]
    fn parse_list_splits_on_whitespace() {
        let ids = ItemId::parse_list("SIZE4 RB4");
        assert_eq!(ids, vec![ItemId("SIZE4".into()), ItemId("RB4".into())]);
    }

    #[test]
    fn parse_list_skips_empty_fragments() {
        assert!(ItemId::parse_list("").is_empty());
        assert_eq!(ItemId::parse_list("  GUI4   WEBGUI4 ").len(), 2);
    }

    #[test]
    fn serde_roundtrip_as_plain_string() {
        let id: ItemId = "UT1".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"UT1\"");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_invalid_id() {
        let result: Result<ItemId, _> = serde_json::from_str("\"A B\"");
        assert!(result.is_err());
    }
}
