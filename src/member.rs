//! Member tables and traversal modes

use crate::edge::EdgeKind;
use crate::level::ApiLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which kind of member is being resolved.
///
/// This doubles as the traversal mode: fields are reachable through both
/// superclasses and interfaces, methods only through superclasses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Field,
    Method,
}

impl MemberKind {
    /// Get the string representation of the member kind
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Method => "method",
        }
    }

    /// Whether resolution of this member kind follows edges of `kind`
    pub fn follows(&self, kind: EdgeKind) -> bool {
        match (self, kind) {
            (_, EdgeKind::SuperClass) => true,
            (MemberKind::Field, EdgeKind::Interface) => true,
            (MemberKind::Method, EdgeKind::Interface) => false,
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Member name → earliest level at which the member was declared directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberTable {
    entries: HashMap<String, ApiLevel>,
}

impl MemberTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` at `since`, keeping the lower of the stored and the new
    /// level. Returns the level now stored.
    pub fn insert_min(&mut self, name: &str, since: ApiLevel) -> ApiLevel {
        match self.entries.get_mut(name) {
            Some(stored) => {
                if since < *stored {
                    *stored = since;
                }
                *stored
            }
            None => {
                self.entries.insert(name.to_string(), since);
                since
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<ApiLevel> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ApiLevel)> {
        self.entries.iter().map(|(name, level)| (name.as_str(), *level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_min_is_order_independent() {
        let mut a = MemberTable::new();
        a.insert_min("x", ApiLevel(20));
        a.insert_min("x", ApiLevel(10));

        let mut b = MemberTable::new();
        b.insert_min("x", ApiLevel(10));
        b.insert_min("x", ApiLevel(20));

        assert_eq!(a.get("x"), Some(ApiLevel(10)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_absent_member() {
        let table = MemberTable::new();
        assert_eq!(table.get("missing"), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_traversal_modes() {
        assert!(MemberKind::Field.follows(EdgeKind::SuperClass));
        assert!(MemberKind::Field.follows(EdgeKind::Interface));
        assert!(MemberKind::Method.follows(EdgeKind::SuperClass));
        assert!(!MemberKind::Method.follows(EdgeKind::Interface));
    }
}
