//! Edge types - versioned "became an ancestor of" relationships
//!
//! A class reaches its ancestors through two kinds of edges:
//! - `SuperClass`: class → class it extends
//! - `Interface`: class → interface it implements
//!
//! Each edge records the API level at which the relationship started holding.
//! Ancestors are referenced by name and resolved through a
//! [`ClassLookup`](crate::api::ClassLookup), never by pointer.

use crate::level::ApiLevel;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of ancestor relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Class extends another class
    SuperClass,
    /// Class implements an interface
    Interface,
}

impl EdgeKind {
    /// Get the string representation of the edge kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::SuperClass => "superclass",
            EdgeKind::Interface => "interface",
        }
    }

    /// Get all edge kinds, in resolution order
    pub fn all() -> &'static [EdgeKind] {
        &[EdgeKind::SuperClass, EdgeKind::Interface]
    }
}

impl FromStr for EdgeKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "superclass" | "super" | "extends" => Ok(EdgeKind::SuperClass),
            "interface" | "implements" => Ok(EdgeKind::Interface),
            _ => Err(crate::Error::InvalidEdgeKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An outgoing ancestor edge of a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuperEdge {
    /// Type of relationship
    pub kind: EdgeKind,
    /// Fully-qualified name of the ancestor
    pub target: String,
    /// Level at which the relationship began
    pub since: ApiLevel,
}

impl SuperEdge {
    /// Create a new edge
    pub fn new(kind: EdgeKind, target: impl Into<String>, since: ApiLevel) -> Self {
        Self {
            kind,
            target: target.into(),
            since,
        }
    }

    /// Level at which a member becomes reachable through this edge, given the
    /// level at which the ancestor itself has it.
    ///
    /// Both the relationship and the ancestor's member must exist, so the
    /// later of the two gates the route.
    pub fn gate(&self, ancestor_level: ApiLevel) -> ApiLevel {
        self.since.max(ancestor_level)
    }
}

/// Append `(target, since)` to `edges` unless an edge to `target` is already
/// recorded. Returns whether the edge was added.
pub(crate) fn push_first(edges: &mut Vec<SuperEdge>, kind: EdgeKind, target: &str, since: ApiLevel) -> bool {
    if edges.iter().any(|edge| edge.target == target) {
        return false;
    }
    edges.push(SuperEdge::new(kind, target, since));
    true
}
