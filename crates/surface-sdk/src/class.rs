//! Wrapper classes and their method maps
//!
//! A `ProxyClass` is the static descriptor of one wrapper type: its name, its
//! parent, and the table of methods whose results must be wrapped. Tables are
//! declared once per class and never mutated; a subclass layers its own
//! bindings on top of its ancestors' by listing them in its own table.
//! Lookup walks the chain most-derived first, so a subclass binding shadows
//! an inherited one with the same method name.

use std::fmt;

/// Whether repeated calls with equal arguments share one wrapper instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// Returns stable, already-existing host state; results are cached per
    /// argument tuple for the lifetime of the calling proxy.
    Accessor,
    /// Creates new host state on every call; results are never cached.
    Factory,
}

impl CachePolicy {
    /// Check if results under this policy are cached
    pub fn is_cached(self) -> bool {
        matches!(self, CachePolicy::Accessor)
    }

    /// Lower-case label used in listings
    pub fn label(self) -> &'static str {
        match self {
            CachePolicy::Accessor => "accessor",
            CachePolicy::Factory => "factory",
        }
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One method map entry: results of `method` are wrapped in `class`.
#[derive(Debug, Clone, Copy)]
pub struct MethodBinding {
    /// Host method name
    pub method: &'static str,
    /// Wrapper class for the method's result
    pub class: &'static ProxyClass,
    /// Result identity policy
    pub policy: CachePolicy,
}

impl MethodBinding {
    /// Binding for an accessor-style method
    pub const fn accessor(method: &'static str, class: &'static ProxyClass) -> Self {
        Self {
            method,
            class,
            policy: CachePolicy::Accessor,
        }
    }

    /// Binding for a factory-style method
    pub const fn factory(method: &'static str, class: &'static ProxyClass) -> Self {
        Self {
            method,
            class,
            policy: CachePolicy::Factory,
        }
    }
}

/// Static descriptor of a wrapper class.
pub struct ProxyClass {
    /// Class name
    pub name: &'static str,
    /// Parent class (None only for the root class)
    pub parent: Option<&'static ProxyClass>,
    /// Bindings declared by this class itself
    pub bindings: &'static [MethodBinding],
}

/// Root of every wrapper class hierarchy. Wraps nothing by itself.
pub static API_PROXY: ProxyClass = ProxyClass::root("ApiProxy", &[]);

impl ProxyClass {
    /// Declare a class without a parent
    pub const fn root(name: &'static str, bindings: &'static [MethodBinding]) -> Self {
        Self {
            name,
            parent: None,
            bindings,
        }
    }

    /// Declare a class extending `parent` with additional bindings
    pub const fn extend(
        name: &'static str,
        parent: &'static ProxyClass,
        bindings: &'static [MethodBinding],
    ) -> Self {
        Self {
            name,
            parent: Some(parent),
            bindings,
        }
    }

    /// Binding declared by this class itself (ancestors not consulted)
    pub fn own_binding(&self, method: &str) -> Option<&'static MethodBinding> {
        let bindings: &'static [MethodBinding] = self.bindings;
        bindings.iter().find(|b| b.method == method)
    }

    /// Resolve a method through this class and its ancestors, most-derived first
    pub fn resolve(&'static self, method: &str) -> Option<&'static MethodBinding> {
        self.ancestry().find_map(|class| class.own_binding(method))
    }

    /// Iterate this class followed by its ancestors up to the root
    pub fn ancestry(&'static self) -> Ancestry {
        Ancestry { next: Some(self) }
    }

    /// Check if this class is `other` or descends from it
    pub fn is_subclass_of(&'static self, other: &'static ProxyClass) -> bool {
        self.ancestry().any(|class| std::ptr::eq(class, other))
    }

    /// Flattened method map as seen from this class.
    ///
    /// Each method name appears once, bound the way `resolve` would bind it.
    /// Sorted by method name.
    pub fn effective_bindings(&'static self) -> Vec<&'static MethodBinding> {
        let mut out: Vec<&'static MethodBinding> = Vec::new();
        for class in self.ancestry() {
            for binding in class.bindings {
                if !out.iter().any(|b| b.method == binding.method) {
                    out.push(binding);
                }
            }
        }
        out.sort_by_key(|b| b.method);
        out
    }

    /// Depth in the hierarchy (root is 0)
    pub fn depth(&'static self) -> usize {
        self.ancestry().count() - 1
    }
}

impl PartialEq for ProxyClass {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for ProxyClass {}

impl fmt::Debug for ProxyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyClass")
            .field("name", &self.name)
            .field("parent", &self.parent.map(|p| p.name))
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

impl fmt::Display for ProxyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Iterator over a class and its ancestors
pub struct Ancestry {
    next: Option<&'static ProxyClass>,
}

impl Iterator for Ancestry {
    type Item = &'static ProxyClass;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LEAF_X: ProxyClass = ProxyClass::extend("LeafX", &API_PROXY, &[]);
    static LEAF_Y: ProxyClass = ProxyClass::extend("LeafY", &API_PROXY, &[]);
    static LEAF_Z: ProxyClass = ProxyClass::extend("LeafZ", &API_PROXY, &[]);

    static BASE: ProxyClass = ProxyClass {
        name: "Base",
        parent: Some(&API_PROXY),
        bindings: &[
            MethodBinding::accessor("m", &LEAF_X),
            MethodBinding::factory("n", &LEAF_Z),
        ],
    };

    static DERIVED: ProxyClass = ProxyClass {
        name: "Derived",
        parent: Some(&BASE),
        bindings: &[MethodBinding::factory("m", &LEAF_Y)],
    };

    #[test]
    fn test_resolve_own_binding() {
        let b = BASE.resolve("m").unwrap();
        assert_eq!(b.class, &LEAF_X);
        assert_eq!(b.policy, CachePolicy::Accessor);
    }

    #[test]
    fn test_resolve_subclass_shadows_ancestor() {
        let b = DERIVED.resolve("m").unwrap();
        assert_eq!(b.class, &LEAF_Y);
        assert_eq!(b.policy, CachePolicy::Factory);
    }

    #[test]
    fn test_resolve_falls_through_to_ancestor() {
        let b = DERIVED.resolve("n").unwrap();
        assert_eq!(b.class, &LEAF_Z);
        assert!(DERIVED.own_binding("n").is_none());
    }

    #[test]
    fn test_ancestor_map_unaffected_by_subclass() {
        assert_eq!(BASE.resolve("m").unwrap().class, &LEAF_X);
        assert_eq!(BASE.bindings.len(), 2);
    }

    #[test]
    fn test_resolve_missing() {
        assert!(DERIVED.resolve("getHostVendor").is_none());
        assert!(API_PROXY.resolve("m").is_none());
    }

    #[test]
    fn test_ancestry_and_subclass() {
        let names: Vec<_> = DERIVED.ancestry().map(|c| c.name).collect();
        assert_eq!(names, vec!["Derived", "Base", "ApiProxy"]);
        assert!(DERIVED.is_subclass_of(&BASE));
        assert!(DERIVED.is_subclass_of(&DERIVED));
        assert!(!BASE.is_subclass_of(&DERIVED));
        assert_eq!(DERIVED.depth(), 2);
    }

    #[test]
    fn test_effective_bindings() {
        let flat = DERIVED.effective_bindings();
        let view: Vec<_> = flat.iter().map(|b| (b.method, b.class.name)).collect();
        assert_eq!(view, vec![("m", "LeafY"), ("n", "LeafZ")]);
    }
}
