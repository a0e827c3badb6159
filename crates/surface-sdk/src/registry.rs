//! Wrapper class registry (name-based lookup)
//!
//! Collects the static class descriptors of a binding surface so tooling can
//! list them, resolve a class by name, and walk the hierarchy downwards.

use rustc_hash::FxHashMap;

use crate::class::{MethodBinding, ProxyClass};

/// Registry of wrapper classes indexed by name.
#[derive(Default)]
pub struct ClassRegistry {
    classes: FxHashMap<&'static str, &'static ProxyClass>,
}

impl ClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class together with its ancestors.
    ///
    /// Returns `false` if a different class with the same name was already
    /// registered; the existing entry is kept.
    pub fn register(&mut self, class: &'static ProxyClass) -> bool {
        let mut consistent = true;
        for c in class.ancestry() {
            match self.classes.get(c.name) {
                Some(existing) if std::ptr::eq(*existing, c) => {}
                Some(_) => {
                    tracing::warn!(class = c.name, "duplicate wrapper class name");
                    consistent = false;
                }
                None => {
                    self.classes.insert(c.name, c);
                }
            }
        }
        consistent
    }

    /// Get a class by name
    pub fn get(&self, name: &str) -> Option<&'static ProxyClass> {
        self.classes.get(name).copied()
    }

    /// Check if a class is registered
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Get the number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All registered classes, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &'static ProxyClass> {
        let mut all: Vec<_> = self.classes.values().copied().collect();
        all.sort_by_key(|c| c.name);
        all.into_iter()
    }

    /// Direct subclasses of `class`, sorted by name
    pub fn subclasses_of(&self, class: &'static ProxyClass) -> Vec<&'static ProxyClass> {
        self.iter()
            .filter(|c| c.parent.is_some_and(|p| std::ptr::eq(p, class)))
            .collect()
    }

    /// Every binding, across all classes, whose result class is `class`
    pub fn producers_of(
        &self,
        class: &'static ProxyClass,
    ) -> Vec<(&'static ProxyClass, &'static MethodBinding)> {
        let mut out = Vec::new();
        for owner in self.iter() {
            for binding in owner.bindings {
                if std::ptr::eq(binding.class, class) {
                    out.push((owner, binding));
                }
            }
        }
        out
    }
}
