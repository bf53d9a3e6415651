//! View descriptors and the handles returned when views are defined.

use crate::change::StoreChange;
use crate::predicate::Predicate;
use crate::refresh::refresh_one;
use crate::store::ViewStore;
use std::rc::{Rc, Weak};
use vista_collection::MasterCollection;
use vista_core::Result;

/// A named view: its predicate and its live store.
///
/// Descriptors are immutable once created. Redefining a view registers a new
/// descriptor with a new store.
#[derive(Debug)]
pub struct ViewDescriptor {
    name: String,
    predicate: Predicate,
    store: Rc<ViewStore>,
}

impl ViewDescriptor {
    pub(crate) fn new(name: String, predicate: Predicate, store: ViewStore) -> Self {
        Self {
            name,
            predicate,
            store: Rc::new(store),
        }
    }

    /// Returns the view name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the membership predicate.
    #[inline]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Returns the live store.
    #[inline]
    pub fn store(&self) -> &Rc<ViewStore> {
        &self.store
    }
}

/// Handle returned by `define_view`.
///
/// Besides exposing the descriptor, a handle can refresh its own view
/// against the master collection it was defined on.
#[derive(Clone, Debug)]
pub struct ViewHandle {
    descriptor: Rc<ViewDescriptor>,
    master: Weak<dyn MasterCollection>,
}

impl ViewHandle {
    pub(crate) fn new(descriptor: Rc<ViewDescriptor>, master: Weak<dyn MasterCollection>) -> Self {
        Self { descriptor, master }
    }

    /// Returns the view name.
    #[inline]
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Returns the membership predicate.
    #[inline]
    pub fn predicate(&self) -> &Predicate {
        self.descriptor.predicate()
    }

    /// Returns the live store.
    #[inline]
    pub fn store(&self) -> Rc<ViewStore> {
        self.descriptor.store().clone()
    }

    /// Returns the descriptor.
    #[inline]
    pub fn descriptor(&self) -> &Rc<ViewDescriptor> {
        &self.descriptor
    }

    /// Recomputes this view from the master collection.
    ///
    /// Returns `Ok(None)` without touching the store if the master collection
    /// has been dropped.
    pub fn refresh(&self) -> Result<Option<StoreChange>> {
        match self.master.upgrade() {
            Some(master) => refresh_one(&self.descriptor, master.as_ref()).map(Some),
            None => Ok(None),
        }
    }
}
