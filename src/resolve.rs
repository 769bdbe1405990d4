//! Member resolution - earliest level at which a member is usable through a
//! class
//!
//! Resolution algorithm:
//! 1. Start from the class's own declaration, if any
//! 2. For every ancestor edge the member kind follows (superclasses, plus
//!    interfaces for fields), resolve the member on the ancestor
//! 3. A route is usable from `max(edge level, ancestor level)`
//! 4. The answer is the minimum over all routes; `None` if there is no route
//!
//! Edges to classes the lookup does not know are skipped. With
//! `guard_cycles` enabled, an edge back into the current path is skipped as
//! well, so cyclic data terminates instead of recursing forever.
//!
//! The traversal recurses once per ancestor and has no depth limit: chains a
//! few hundred classes deep are fine, chains of thousands can overflow a
//! default 2 MB thread stack.

use std::path::Path;

use crate::api::ClassLookup;
use crate::class::ApiClass;
use crate::config::{self, ResolverConfig};
use crate::edge::EdgeKind;
use crate::level::ApiLevel;
use crate::member::MemberKind;

/// Where the winning level came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Declared directly on the queried class
    Declared,
    /// Inherited through the edge to `via`
    Inherited { via: String, kind: EdgeKind },
}

/// Result of resolving a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub level: ApiLevel,
    pub route: Route,
}

/// Read-only traversal over a [`ClassLookup`].
///
/// Holds no mutable state, so one resolver can serve any number of threads.
pub struct Resolver<'a, L: ClassLookup + ?Sized> {
    lookup: &'a L,
    config: ResolverConfig,
}

impl<'a, L: ClassLookup + ?Sized> Resolver<'a, L> {
    /// Create a resolver with the default configuration
    pub fn new(lookup: &'a L) -> Self {
        Self::with_config(lookup, ResolverConfig::default())
    }

    pub fn with_config(lookup: &'a L, config: ResolverConfig) -> Self {
        Self { lookup, config }
    }

    /// Create a resolver configured from a TOML file, falling back to the
    /// defaults when the file does not exist.
    pub fn from_config_file(lookup: &'a L, path: Option<&Path>) -> anyhow::Result<Self> {
        let config = config::load_config(path)?.unwrap_or_default();
        Ok(Self::with_config(lookup, config))
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a member of `class`, reporting the winning route.
    ///
    /// Ties keep the first candidate in traversal order: own declaration,
    /// superclasses, then interfaces, each in insertion order.
    pub fn resolve(&self, class: &ApiClass, kind: MemberKind, name: &str) -> Option<Resolution> {
        let mut path = Vec::new();
        let resolution = self.walk(class, kind, name, &mut path);
        tracing::trace!(
            class = class.name(),
            member = name,
            %kind,
            level = ?resolution.as_ref().map(|r| r.level),
            "resolved"
        );
        resolution
    }

    pub fn resolve_field(&self, class: &ApiClass, name: &str) -> Option<ApiLevel> {
        self.resolve(class, MemberKind::Field, name).map(|r| r.level)
    }

    pub fn resolve_method(&self, class: &ApiClass, signature: &str) -> Option<ApiLevel> {
        self.resolve(class, MemberKind::Method, signature).map(|r| r.level)
    }

    /// Resolve by class name; `None` if the class itself is unknown
    pub fn resolve_in(&self, class_name: &str, kind: MemberKind, name: &str) -> Option<Resolution> {
        let class = self.lookup.lookup(class_name)?;
        self.resolve(class, kind, name)
    }

    fn walk<'c>(
        &'c self,
        class: &'c ApiClass,
        kind: MemberKind,
        name: &str,
        path: &mut Vec<&'c str>,
    ) -> Option<Resolution> {
        let mut best = class.member(kind, name).map(|level| Resolution {
            level,
            route: Route::Declared,
        });

        path.push(class.name());
        for edge in class.edges().filter(|edge| kind.follows(edge.kind)) {
            if self.config.guard_cycles && path.contains(&edge.target.as_str()) {
                tracing::warn!(
                    class = class.name(),
                    ancestor = %edge.target,
                    "cyclic ancestry, skipping edge"
                );
                continue;
            }
            let Some(ancestor) = self.lookup.lookup(&edge.target) else {
                tracing::debug!(class = class.name(), ancestor = %edge.target, "unknown ancestor");
                continue;
            };
            let Some(inherited) = self.walk(ancestor, kind, name, path) else {
                continue;
            };

            let candidate = edge.gate(inherited.level);
            tracing::trace!(
                class = class.name(),
                ancestor = %edge.target,
                edge_since = %edge.since,
                inherited = %inherited.level,
                %candidate,
                "route"
            );
            if best.as_ref().is_none_or(|b| candidate < b.level) {
                best = Some(Resolution {
                    level: candidate,
                    route: Route::Inherited {
                        via: edge.target.clone(),
                        kind: edge.kind,
                    },
                });
            }
        }
        path.pop();

        best
    }
}
