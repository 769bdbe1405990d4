//! API class - one node of the versioned class hierarchy
//!
//! A class knows the level it was introduced at, the ancestors it gained
//! over time and the members it declares directly. Everything it inherits is
//! computed on demand by the [`Resolver`](crate::resolve::Resolver).

use crate::api::ClassLookup;
use crate::edge::{self, EdgeKind, SuperEdge};
use crate::level::ApiLevel;
use crate::member::{MemberKind, MemberTable};
use crate::resolve::Resolver;

/// A class or interface of the platform API.
///
/// Built once through the `add_*` methods, then only read. Reads never
/// mutate, so a finished class can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct ApiClass {
    name: String,
    since: ApiLevel,
    super_classes: Vec<SuperEdge>,
    interfaces: Vec<SuperEdge>,
    fields: MemberTable,
    methods: MemberTable,
}

impl ApiClass {
    /// Create a class with no ancestors and no members
    pub fn new(name: impl Into<String>, since: u32) -> Self {
        Self {
            name: name.into(),
            since: ApiLevel(since),
            super_classes: Vec::new(),
            interfaces: Vec::new(),
            fields: MemberTable::new(),
            methods: MemberTable::new(),
        }
    }

    /// Fully-qualified class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Level at which the class itself was introduced
    pub fn since(&self) -> ApiLevel {
        self.since
    }

    /// Record a field declared directly on this class.
    ///
    /// The lowest level ever registered for a name is kept.
    pub fn add_field(&mut self, name: &str, since: u32) {
        self.fields.insert_min(name, ApiLevel(since));
    }

    /// Record a method declared directly on this class.
    ///
    /// The lowest level ever registered for a signature is kept.
    pub fn add_method(&mut self, signature: &str, since: u32) {
        self.methods.insert_min(signature, ApiLevel(since));
    }

    /// Record that this class extends `name` from level `since` on.
    ///
    /// Intentionally first-write-wins, unlike members: a later
    /// re-declaration of the same superclass is ignored even when its level
    /// is lower.
    pub fn add_super_class(&mut self, name: &str, since: u32) {
        edge::push_first(&mut self.super_classes, EdgeKind::SuperClass, name, ApiLevel(since));
    }

    /// Record that this class implements `name` from level `since` on.
    ///
    /// First-write-wins, same as [`add_super_class`](Self::add_super_class).
    pub fn add_interface(&mut self, name: &str, since: u32) {
        edge::push_first(&mut self.interfaces, EdgeKind::Interface, name, ApiLevel(since));
    }

    /// Level of a field declared directly on this class
    pub fn field(&self, name: &str) -> Option<ApiLevel> {
        self.fields.get(name)
    }

    /// Level of a method declared directly on this class
    pub fn method(&self, signature: &str) -> Option<ApiLevel> {
        self.methods.get(signature)
    }

    /// Own declaration of a member of the given kind
    pub fn member(&self, kind: MemberKind, name: &str) -> Option<ApiLevel> {
        match kind {
            MemberKind::Field => self.field(name),
            MemberKind::Method => self.method(name),
        }
    }

    pub fn super_classes(&self) -> &[SuperEdge] {
        &self.super_classes
    }

    pub fn interfaces(&self) -> &[SuperEdge] {
        &self.interfaces
    }

    /// All ancestor edges, superclasses first
    pub fn edges(&self) -> impl Iterator<Item = &SuperEdge> {
        self.super_classes.iter().chain(self.interfaces.iter())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, ApiLevel)> {
        self.fields.iter()
    }

    pub fn methods(&self) -> impl Iterator<Item = (&str, ApiLevel)> {
        self.methods.iter()
    }

    /// Minimum level at which field `name` is usable through this class,
    /// or `None` if no reachable class declares it.
    pub fn resolve_field<L>(&self, name: &str, api: &L) -> Option<ApiLevel>
    where
        L: ClassLookup + ?Sized,
    {
        Resolver::new(api)
            .resolve(self, MemberKind::Field, name)
            .map(|resolution| resolution.level)
    }

    /// Minimum level at which method `signature` is usable through this
    /// class. Only superclasses are searched.
    pub fn resolve_method<L>(&self, signature: &str, api: &L) -> Option<ApiLevel>
    where
        L: ClassLookup + ?Sized,
    {
        Resolver::new(api)
            .resolve(self, MemberKind::Method, signature)
            .map(|resolution| resolution.level)
    }
}

impl std::fmt::Display for ApiClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
