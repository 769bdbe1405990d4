//! # apisince - versioned class hierarchy
//!
//! Answers "from which API level on is this field or method usable when
//! accessed through this class?"
//!
//! apisince provides:
//! - [`ApiClass`]: one class with versioned ancestor edges and member tables
//! - [`Api`]: a name-keyed registry implementing [`ClassLookup`]
//! - [`Resolver`]: the read-only traversal computing the earliest usable level

pub mod level;
pub mod edge;
pub mod member;
pub mod class;
pub mod api;
pub mod resolve;
pub mod config;

// Re-exports for convenient access
pub use level::ApiLevel;
pub use edge::{EdgeKind, SuperEdge};
pub use member::{MemberKind, MemberTable};
pub use class::ApiClass;
pub use api::{Api, ApiStats, ClassLookup};
pub use resolve::{Resolution, Resolver, Route};
pub use config::ResolverConfig;

/// Result type alias for apisince operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for apisince operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Class name must not be empty")]
    EmptyName,

    #[error("Duplicate class: {0}")]
    DuplicateClass(String),

    #[error("Cyclic ancestry: {}", .0.join(" -> "))]
    CyclicAncestry(Vec<String>),

    #[error("Invalid API level: {0}")]
    InvalidLevel(String),

    #[error("Unknown edge kind: {0}")]
    InvalidEdgeKind(String),
}
