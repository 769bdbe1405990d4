//! Api - name-keyed registry of classes
//!
//! Resolution only needs one thing from its surroundings: turning an
//! ancestor name back into a class. That contract is [`ClassLookup`]; [`Api`]
//! is the owned registry the rest of the crate uses to satisfy it.

use std::collections::{HashMap, HashSet};

use crate::class::ApiClass;
use crate::{Error, Result};

/// Name → class lookup used during resolution.
///
/// Implementations must return the same class for a name for as long as the
/// borrow lasts; the borrow checker already keeps classes from being removed
/// or mutated mid-traversal.
pub trait ClassLookup {
    fn lookup(&self, name: &str) -> Option<&ApiClass>;
}

impl ClassLookup for HashMap<String, ApiClass> {
    fn lookup(&self, name: &str) -> Option<&ApiClass> {
        self.get(name)
    }
}

/// Registry of every known class, keyed by fully-qualified name.
///
/// Collecting an iterator of classes into an `Api` keeps the first class for
/// each name and drops empty or duplicate names with a warning. Use
/// [`add_class`](Api::add_class) when the errors matter.
#[derive(Debug, Default, Clone)]
pub struct Api {
    classes: HashMap<String, ApiClass>,
}

impl Api {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Names must be non-empty and unique.
    pub fn add_class(&mut self, class: ApiClass) -> Result<()> {
        if class.name().is_empty() {
            return Err(Error::EmptyName);
        }
        if self.classes.contains_key(class.name()) {
            return Err(Error::DuplicateClass(class.name().to_string()));
        }

        tracing::debug!(class = class.name(), since = %class.since(), "registered class");
        self.classes.insert(class.name().to_string(), class);
        Ok(())
    }

    /// Get a class by name
    pub fn get(&self, name: &str) -> Option<&ApiClass> {
        self.classes.get(name)
    }

    /// Mutable access for the build phase
    pub fn class_mut(&mut self, name: &str) -> Option<&mut ApiClass> {
        self.classes.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Get all classes
    pub fn classes(&self) -> impl Iterator<Item = &ApiClass> {
        self.classes.values()
    }

    /// Check that no class is, directly or transitively, its own ancestor.
    ///
    /// Edges to unknown classes are ignored. On failure the error carries the
    /// cycle as a list of names, starting and ending with the same class.
    /// The walk recurses once per ancestor, so hierarchies thousands of
    /// classes deep can exhaust the thread's stack.
    pub fn check_acyclic(&self) -> Result<()> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();

        let mut done = HashSet::new();
        let mut path = Vec::new();
        for name in names {
            self.visit(name, &mut path, &mut done)?;
        }
        Ok(())
    }

    fn visit<'a>(&'a self, name: &'a str, path: &mut Vec<&'a str>, done: &mut HashSet<&'a str>) -> Result<()> {
        if done.contains(name) {
            return Ok(());
        }
        if let Some(start) = path.iter().position(|n| *n == name) {
            let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            tracing::warn!(cycle = ?cycle, "cyclic ancestry");
            return Err(Error::CyclicAncestry(cycle));
        }
        let Some(class) = self.classes.get(name) else {
            return Ok(());
        };

        path.push(name);
        for edge in class.edges() {
            self.visit(&edge.target, path, done)?;
        }
        path.pop();
        done.insert(name);
        Ok(())
    }

    /// Get statistics about the registry
    pub fn stats(&self) -> ApiStats {
        let mut stats = ApiStats {
            classes: self.classes.len(),
            ..ApiStats::default()
        };
        for class in self.classes.values() {
            stats.super_edges += class.super_classes().len();
            stats.interface_edges += class.interfaces().len();
            stats.fields += class.fields().count();
            stats.methods += class.methods().count();
            stats.dangling_edges += class.edges().filter(|e| !self.contains(&e.target)).count();
        }
        stats
    }
}

impl ClassLookup for Api {
    fn lookup(&self, name: &str) -> Option<&ApiClass> {
        self.get(name)
    }
}

impl FromIterator<ApiClass> for Api {
    /// Collect classes, keeping the first class seen for each name.
    fn from_iter<I: IntoIterator<Item = ApiClass>>(iter: I) -> Self {
        let mut api = Api::new();
        for class in iter {
            if let Err(e) = api.add_class(class) {
                tracing::warn!("skipping class: {}", e);
            }
        }
        api
    }
}

/// Statistics about an [`Api`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiStats {
    pub classes: usize,
    pub super_edges: usize,
    pub interface_edges: usize,
    pub fields: usize,
    pub methods: usize,
    /// Edges whose target is not registered
    pub dangling_edges: usize,
}

impl std::fmt::Display for ApiStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "API Statistics:")?;
        writeln!(f, "  Classes: {}", self.classes)?;
        writeln!(f, "  Members: {} fields, {} methods", self.fields, self.methods)?;
        writeln!(f, "  Edges: {} superclass, {} interface ({} dangling)",
            self.super_edges, self.interface_edges, self.dangling_edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut api = Api::new();
        api.add_class(ApiClass::new("android/view/View", 1)).unwrap();

        assert_eq!(api.len(), 1);
        assert_eq!(api.lookup("android/view/View").unwrap().name(), "android/view/View");
        assert!(api.lookup("android/view/ViewGroup").is_none());
    }

    #[test]
    fn test_rejects_empty_name() {
        let mut api = Api::new();
        assert!(matches!(api.add_class(ApiClass::new("", 1)), Err(Error::EmptyName)));
        assert!(api.is_empty());
    }

    #[test]
    fn test_rejects_duplicate() {
        let mut api = Api::new();
        api.add_class(ApiClass::new("A", 1)).unwrap();

        let err = api.add_class(ApiClass::new("A", 7)).unwrap_err();
        assert!(matches!(err, Error::DuplicateClass(ref name) if name == "A"));
        assert_eq!(api.get("A").unwrap().since().get(), 1);
    }

    #[test]
    fn test_from_iter_keeps_first() {
        let api: Api = vec![ApiClass::new("A", 1), ApiClass::new("A", 9), ApiClass::new("B", 2)]
            .into_iter()
            .collect();

        assert_eq!(api.len(), 2);
        assert_eq!(api.get("A").unwrap().since().get(), 1);
    }

    #[test]
    fn test_from_iter_drops_empty_name() {
        let api: Api = vec![ApiClass::new("", 1), ApiClass::new("B", 2)].into_iter().collect();

        assert_eq!(api.len(), 1);
        assert!(api.contains("B"));
        assert!(!api.contains(""));
    }

    #[test]
    fn test_class_mut_during_build() {
        let mut api = Api::new();
        api.add_class(ApiClass::new("A", 1)).unwrap();
        api.class_mut("A").unwrap().add_field("f", 4);

        assert_eq!(api.get("A").unwrap().field("f").map(|l| l.get()), Some(4));
    }

    #[test]
    fn test_check_acyclic_accepts_diamond() {
        let mut a = ApiClass::new("A", 1);
        a.add_super_class("B", 1);
        a.add_interface("C", 1);
        let mut b = ApiClass::new("B", 1);
        b.add_super_class("D", 1);
        let mut c = ApiClass::new("C", 1);
        c.add_interface("D", 1);
        c.add_interface("Missing", 1);
        let api: Api = vec![a, b, c, ApiClass::new("D", 1)].into_iter().collect();

        assert!(api.check_acyclic().is_ok());
    }

    #[test]
    fn test_check_acyclic_reports_cycle() {
        let mut a = ApiClass::new("A", 1);
        a.add_super_class("B", 1);
        let mut b = ApiClass::new("B", 1);
        b.add_interface("A", 1);
        let api: Api = vec![a, b].into_iter().collect();

        match api.check_acyclic() {
            Err(Error::CyclicAncestry(cycle)) => {
                assert_eq!(cycle, vec!["A".to_string(), "B".to_string(), "A".to_string()]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_check_acyclic_self_loop() {
        let mut a = ApiClass::new("A", 1);
        a.add_super_class("A", 1);
        let api: Api = vec![a].into_iter().collect();

        assert!(matches!(api.check_acyclic(), Err(Error::CyclicAncestry(_))));
    }

    #[test]
    fn test_stats() {
        let mut a = ApiClass::new("A", 1);
        a.add_super_class("B", 1);
        a.add_interface("Gone", 3);
        a.add_field("f", 1);
        a.add_method("m()V", 1);
        a.add_method("n()V", 2);
        let api: Api = vec![a, ApiClass::new("B", 1)].into_iter().collect();

        let stats = api.stats();
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.super_edges, 1);
        assert_eq!(stats.interface_edges, 1);
        assert_eq!(stats.fields, 1);
        assert_eq!(stats.methods, 2);
        assert_eq!(stats.dangling_edges, 1);
        assert!(stats.to_string().contains("1 dangling"));
    }
}
