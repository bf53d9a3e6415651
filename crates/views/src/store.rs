//! Live view stores.
//!
//! A `ViewStore` holds the materialized contents of one view. Consumers keep an
//! `Rc<ViewStore>` and read it at any time; the refresh engine is the only
//! writer and replaces the contents in place, so the store identity survives
//! every refresh.

use crate::change::StoreChange;
use core::cell::{Cell, RefCell};
use vista_collection::{FilteredCollection, ListenerId, ListenerSet};
use vista_core::{RecordKey, RecordRef};

/// The materialized contents of a view, plus its observers.
pub struct ViewStore {
    /// Current contents
    contents: RefCell<FilteredCollection>,
    /// Observers notified after each refresh
    observers: RefCell<ListenerSet<StoreChange>>,
    /// Number of refreshes applied since creation
    refreshes: Cell<u64>,
}

impl ViewStore {
    /// Creates a store with initial contents.
    pub(crate) fn new(contents: FilteredCollection) -> Self {
        Self {
            contents: RefCell::new(contents),
            observers: RefCell::new(ListenerSet::new()),
            refreshes: Cell::new(0),
        }
    }

    /// Returns the records, in master order.
    pub fn records(&self) -> Vec<RecordRef> {
        self.contents.borrow().records().to_vec()
    }

    /// Returns the record keys, in master order.
    pub fn keys(&self) -> Vec<RecordKey> {
        self.contents.borrow().keys()
    }

    /// Looks up a record by key.
    pub fn get(&self, key: RecordKey) -> Option<RecordRef> {
        self.contents.borrow().get(key).cloned()
    }

    /// Returns the record at a position.
    pub fn get_at(&self, index: usize) -> Option<RecordRef> {
        self.contents.borrow().records().get(index).cloned()
    }

    /// Returns the position of a record by key.
    pub fn index_of(&self, key: RecordKey) -> Option<usize> {
        self.contents.borrow().position(key)
    }

    /// Returns true if a record with this key is in the view.
    #[inline]
    pub fn contains_key(&self, key: RecordKey) -> bool {
        self.contents.borrow().contains_key(key)
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.contents.borrow().len()
    }

    /// Returns true if the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.borrow().is_empty()
    }

    /// Returns how many refreshes have replaced the contents.
    #[inline]
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.get()
    }

    /// Subscribes to refresh notifications.
    ///
    /// The callback runs after the new contents are installed and may read
    /// this store.
    pub fn subscribe<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&StoreChange) + 'static,
    {
        self.observers.borrow_mut().subscribe(callback)
    }

    /// Unsubscribes by ID.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.observers.borrow_mut().unsubscribe(id)
    }

    /// Returns the number of observers.
    pub fn subscription_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Swaps in new contents and notifies observers once.
    pub(crate) fn replace(&self, next: FilteredCollection) -> StoreChange {
        let change = {
            let mut contents = self.contents.borrow_mut();
            let change = StoreChange::between(&contents, &next);
            *contents = next;
            change
        };
        self.refreshes.set(self.refreshes.get() + 1);

        let observers = self.observers.borrow().snapshot();
        for observer in observers {
            observer(&change);
        }
        change
    }
}

impl core::fmt::Debug for ViewStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewStore")
            .field("keys", &self.keys())
            .field("refreshes", &self.refreshes.get())
            .finish()
    }
}
