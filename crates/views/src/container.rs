//! The container pairing a master collection with its named views.

use crate::adapter::{AdapterSubscription, MasterAdapter};
use crate::change::StoreChange;
use crate::config::{ViewDefinition, ViewsConfig};
use crate::predicate::Predicate;
use crate::refresh::{refresh_all, refresh_one, RefreshReport};
use crate::registry::ViewRegistry;
use crate::store::ViewStore;
use crate::view::{ViewDescriptor, ViewHandle};
use core::cell::RefCell;
use indexmap::IndexMap;
use std::rc::Rc;
use tracing::{debug, warn};
use vista_collection::{filter_by, MasterCollection};
use vista_core::{Error, RecordRef, Result};

/// A master collection together with the views derived from it.
///
/// Construction defines the configured views and attaches the view adapter to
/// the master collection. From then on every master mutation refreshes all
/// views before the mutating call returns, until the container is detached
/// or dropped.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use vista_collection::RecordStore;
/// use vista_core::Record;
/// use vista_views::{ViewedCollection, ViewsConfig};
///
/// let people = Rc::new(RecordStore::new());
/// let views = ViewedCollection::new(
///     people.clone(),
///     ViewsConfig::new().with_filter("Adults", |r| {
///         r.get("Age").and_then(|v| v.as_i64()).map(|age| age > 20).unwrap_or(false)
///     }),
/// );
///
/// let adults = views.view_store("Adults").unwrap();
/// people.add(vec![Record::new(1).with_field("Age", 25i64)]).unwrap();
/// assert_eq!(adults.keys(), vec![1]);
/// ```
pub struct ViewedCollection {
    master: Rc<dyn MasterCollection>,
    registry: Rc<RefCell<ViewRegistry>>,
    subscription: Option<AdapterSubscription>,
}

impl ViewedCollection {
    /// Creates the container, defines the configured views and attaches to
    /// the master collection.
    pub fn new<M>(master: Rc<M>, config: ViewsConfig) -> Self
    where
        M: MasterCollection + 'static,
    {
        let master: Rc<dyn MasterCollection> = master;
        let mut container = Self {
            master,
            registry: Rc::new(RefCell::new(ViewRegistry::new())),
            subscription: None,
        };
        container.init_views(&config);
        container.subscription = Some(MasterAdapter::attach(&container.master, &container.registry));
        container
    }

    /// Defines each configured view in order.
    ///
    /// Entries that cannot be defined are logged and skipped. Returns the
    /// number of views defined.
    pub fn init_views(&self, config: &ViewsConfig) -> usize {
        let mut defined = 0;
        for definition in config.definitions() {
            match self.add_view(definition.clone()) {
                Ok(_) => defined += 1,
                Err(err) => warn!(view = %definition.name, error = %err, "skipping configured view"),
            }
        }
        defined
    }

    /// Defines a view and materializes it from the current master records.
    ///
    /// An existing view with the same name is replaced; its store is no
    /// longer reachable through the container. Fails, registering nothing,
    /// if the name is empty or the predicate fails on a current record.
    pub fn define_view(&self, name: impl Into<String>, predicate: Predicate) -> Result<ViewHandle> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_view_name(name));
        }

        let records = self.master.records();
        let initial = filter_by(&records, |record| predicate.test(record))?;
        let descriptor = Rc::new(ViewDescriptor::new(name, predicate, ViewStore::new(initial)));

        let previous = self.registry.borrow_mut().register(descriptor.clone());
        if previous.is_some() {
            warn!(view = descriptor.name(), "view already exists, overwriting");
        }
        debug!(view = descriptor.name(), len = descriptor.store().len(), "view defined");

        Ok(ViewHandle::new(descriptor, Rc::downgrade(&self.master)))
    }

    /// Defines a view from a configuration entry.
    pub fn add_view(&self, definition: ViewDefinition) -> Result<ViewHandle> {
        self.define_view(definition.name, definition.predicate)
    }

    /// Returns the live store of a view, or `None` for an unknown name.
    pub fn view_store(&self, name: &str) -> Option<Rc<ViewStore>> {
        self.registry.borrow().get(name).map(|d| d.store().clone())
    }

    /// Returns the descriptor of a view, or `None` for an unknown name.
    pub fn view_descriptor(&self, name: &str) -> Option<Rc<ViewDescriptor>> {
        self.registry.borrow().get(name).cloned()
    }

    /// Returns a handle to a view, or `None` for an unknown name.
    pub fn view(&self, name: &str) -> Option<ViewHandle> {
        self.view_descriptor(name)
            .map(|descriptor| ViewHandle::new(descriptor, Rc::downgrade(&self.master)))
    }

    /// Returns every view, keyed by name, in registry order.
    ///
    /// The mapping is a snapshot of the registry; the stores it references
    /// are the live ones.
    pub fn views(&self) -> IndexMap<String, Rc<ViewDescriptor>> {
        self.registry.borrow().as_map().clone()
    }

    /// Returns the view names, in registry order.
    pub fn view_names(&self) -> Vec<String> {
        self.registry.borrow().names()
    }

    /// Returns the number of views.
    pub fn view_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Refreshes every view from the master collection.
    pub fn refresh_all(&self) -> RefreshReport {
        let descriptors = self.registry.borrow().descriptors();
        refresh_all(&descriptors, self.master.as_ref())
    }

    /// Refreshes one view by name. Returns `Ok(None)` for an unknown name.
    pub fn refresh_view(&self, name: &str) -> Result<Option<StoreChange>> {
        match self.view_descriptor(name) {
            Some(descriptor) => refresh_one(&descriptor, self.master.as_ref()).map(Some),
            None => Ok(None),
        }
    }

    /// Resolves a record taken from a view to the master collection's record
    /// with the same key, or `None` if the master no longer has it.
    pub fn map_view_record_to_master(&self, record: &RecordRef) -> Option<RecordRef> {
        let key = record.borrow().key();
        self.master.get_by_key(key)
    }

    /// Returns the master collection.
    #[inline]
    pub fn master(&self) -> &Rc<dyn MasterCollection> {
        &self.master
    }

    /// Returns true while master events refresh the views.
    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .map(AdapterSubscription::is_attached)
            .unwrap_or(false)
    }

    /// Stops refreshing views on master events.
    ///
    /// Views keep their current contents and can still be refreshed
    /// explicitly. Returns true if the container was attached.
    pub fn detach(&mut self) -> bool {
        self.subscription
            .take()
            .map(|mut subscription| subscription.detach())
            .unwrap_or(false)
    }
}

impl core::fmt::Debug for ViewedCollection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewedCollection")
            .field("views", &self.view_names())
            .field("attached", &self.is_attached())
            .finish()
    }
}
