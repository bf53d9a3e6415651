//! Runtime registry of views, keyed by name.
//!
//! The registry is separate from the `ViewsConfig` it may have been seeded
//! from: configuration is read once, the registry is what is live.

use crate::view::ViewDescriptor;
use indexmap::IndexMap;
use std::rc::Rc;

/// Mapping from view name to descriptor, iterated in definition order.
///
/// Redefining an existing name replaces the descriptor in its original slot.
#[derive(Clone, Debug, Default)]
pub struct ViewRegistry {
    views: IndexMap<String, Rc<ViewDescriptor>>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its name.
    ///
    /// Returns the descriptor it replaced, if any.
    pub fn register(&mut self, descriptor: Rc<ViewDescriptor>) -> Option<Rc<ViewDescriptor>> {
        self.views.insert(descriptor.name().to_string(), descriptor)
    }

    /// Looks up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&Rc<ViewDescriptor>> {
        self.views.get(name)
    }

    /// Returns true if a view with this name is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Returns the view names, in registry order.
    pub fn names(&self) -> Vec<String> {
        self.views.keys().cloned().collect()
    }

    /// Returns the descriptors, in registry order.
    pub fn descriptors(&self) -> Vec<Rc<ViewDescriptor>> {
        self.views.values().cloned().collect()
    }

    /// Returns the full name -> descriptor mapping.
    #[inline]
    pub fn as_map(&self) -> &IndexMap<String, Rc<ViewDescriptor>> {
        &self.views
    }

    /// Iterates over `(name, descriptor)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rc<ViewDescriptor>)> {
        self.views.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of views.
    #[inline]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns true if no views are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;
    use crate::store::ViewStore;
    use vista_collection::FilteredCollection;

    fn descriptor(name: &str) -> Rc<ViewDescriptor> {
        Rc::new(ViewDescriptor::new(
            name.to_string(),
            Predicate::all(),
            ViewStore::new(FilteredCollection::new()),
        ))
    }

    #[test]
    fn test_view_registry_new() {
        let registry = ViewRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("View1").is_none());
    }

    #[test]
    fn test_view_registry_register_in_order() {
        let mut registry = ViewRegistry::new();
        registry.register(descriptor("View2"));
        registry.register(descriptor("View1"));
        registry.register(descriptor("View3"));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), vec!["View2", "View1", "View3"]);
        assert!(registry.contains("View1"));
    }

    #[test]
    fn test_view_registry_overwrite_keeps_slot() {
        let mut registry = ViewRegistry::new();
        let first = descriptor("View1");
        registry.register(first.clone());
        registry.register(descriptor("View2"));

        let replacement = descriptor("View1");
        let previous = registry.register(replacement.clone());

        assert!(Rc::ptr_eq(&previous.unwrap(), &first));
        assert!(Rc::ptr_eq(registry.get("View1").unwrap(), &replacement));
        assert_eq!(registry.names(), vec!["View1", "View2"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_view_registry_iter() {
        let mut registry = ViewRegistry::new();
        registry.register(descriptor("A"));
        registry.register(descriptor("B"));

        let names: Vec<&str> = registry.iter().map(|(name, d)| {
            assert_eq!(name, d.name());
            name
        }).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(registry.as_map().len(), 2);
    }
}
