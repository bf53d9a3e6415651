//! Wiring between master collection events and the refresh engine.
//!
//! `MasterAdapter::attach` subscribes to the master collection and returns an
//! `AdapterSubscription`. While the subscription is alive, every added,
//! removed, updated or refreshed event triggers a full refresh of all
//! registered views before the mutating call returns. Dropping the
//! subscription (or calling `detach`) unsubscribes.

use crate::refresh::refresh_all;
use crate::registry::ViewRegistry;
use core::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;
use vista_collection::{CollectionEvent, ListenerId, MasterCollection};

/// Attaches view refreshing to a master collection.
pub struct MasterAdapter;

impl MasterAdapter {
    /// Subscribes `registry` to the change events of `master`.
    ///
    /// The listener holds only weak references, so neither side is kept
    /// alive by the subscription.
    pub fn attach(
        master: &Rc<dyn MasterCollection>,
        registry: &Rc<RefCell<ViewRegistry>>,
    ) -> AdapterSubscription {
        let weak_master = Rc::downgrade(master);
        let weak_registry = Rc::downgrade(registry);

        let listener_master = weak_master.clone();
        let id = master.subscribe(Box::new(move |event: &CollectionEvent| {
            let (Some(master), Some(registry)) = (listener_master.upgrade(), weak_registry.upgrade()) else {
                return;
            };
            // Release the registry borrow before refreshing so store observers
            // may query or define views.
            let descriptors = {
                let registry = registry.borrow();
                if registry.is_empty() {
                    return;
                }
                registry.descriptors()
            };
            debug!(event = event.kind(), views = descriptors.len(), "refreshing views");
            refresh_all(&descriptors, master.as_ref());
        }));

        debug!(listener = id, "view adapter attached");
        AdapterSubscription {
            master: weak_master,
            id,
            attached: true,
        }
    }
}

/// Live subscription of a view registry to a master collection.
#[must_use = "dropping the subscription detaches the views from the master collection"]
pub struct AdapterSubscription {
    master: Weak<dyn MasterCollection>,
    id: ListenerId,
    attached: bool,
}

impl AdapterSubscription {
    /// Returns the listener id registered on the master collection.
    #[inline]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Returns true until the subscription is detached.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Unsubscribes from the master collection.
    ///
    /// Returns true if the listener was still registered.
    pub fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.attached = false;
        let removed = self
            .master
            .upgrade()
            .map(|master| master.unsubscribe(self.id))
            .unwrap_or(false);
        debug!(listener = self.id, removed, "view adapter detached");
        removed
    }
}

impl Drop for AdapterSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl core::fmt::Debug for AdapterSubscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdapterSubscription")
            .field("id", &self.id)
            .field("attached", &self.attached)
            .finish()
    }
}
