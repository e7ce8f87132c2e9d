//! Expense identifiers
//!
//! Ids are opaque strings. New ids are random UUIDs, but any string read back
//! from storage is accepted verbatim so hand-written or older data keeps its ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique, immutable identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for compact listings
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl FromStr for ExpenseId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_ids_are_uuids() {
        let id = ExpenseId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_new_ids_are_unique() {
        let ids: HashSet<_> = (0..100).map(|_| ExpenseId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_short_form() {
        let id = ExpenseId::from_string("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "550e8400");

        let sample = ExpenseId::from_string("3");
        assert_eq!(sample.short(), "3");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ExpenseId::from_string("1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");

        let back: ExpenseId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(back, id);
    }
}
