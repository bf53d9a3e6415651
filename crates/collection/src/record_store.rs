//! In-memory master collection.
//!
//! `RecordStore` keeps records in insertion order with a key index and emits a
//! `CollectionEvent` after every mutation. All methods take `&self`: the store
//! is meant to be shared behind an `Rc` and read by its own listeners while an
//! event is being dispatched.

use crate::event::CollectionEvent;
use crate::listener::{ListenerId, ListenerSet};
use crate::master::MasterCollection;
use core::cell::{Cell, RefCell};
use hashbrown::{HashMap, HashSet};
use tracing::debug;
use vista_core::{Error, Record, RecordKey, RecordRef, Result};

#[derive(Default)]
struct Items {
    /// Records in collection order
    order: Vec<RecordRef>,
    /// Record key -> record
    by_key: HashMap<RecordKey, RecordRef>,
}

impl Items {
    fn check_new_keys(&self, records: &[Record]) -> Result<()> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            let key = record.key();
            if self.by_key.contains_key(&key) || !seen.insert(key) {
                return Err(Error::duplicate_key(key));
            }
        }
        Ok(())
    }
}

/// An ordered, keyed record collection that reports its changes.
#[derive(Default)]
pub struct RecordStore {
    items: RefCell<Items>,
    listeners: RefCell<ListenerSet<CollectionEvent>>,
    suspended: Cell<bool>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with records. No event is emitted.
    pub fn with_records(records: Vec<Record>) -> Result<Self> {
        let store = Self::new();
        {
            let mut items = store.items.borrow_mut();
            items.check_new_keys(&records)?;
            for record in records {
                let key = record.key();
                let record = record.into_ref();
                items.by_key.insert(key, record.clone());
                items.order.push(record);
            }
        }
        Ok(store)
    }

    /// Appends records and emits `Added`.
    ///
    /// Fails without changing the store if any key is already present or
    /// repeated within `records`.
    pub fn add(&self, records: Vec<Record>) -> Result<Vec<RecordRef>> {
        let len = self.items.borrow().order.len();
        self.insert_all(len, records)
    }

    /// Inserts a record at `index` (clamped to the end) and emits `Added`.
    pub fn insert(&self, index: usize, record: Record) -> Result<RecordRef> {
        let mut inserted = self.insert_all(index, vec![record])?;
        Ok(inserted.remove(0))
    }

    fn insert_all(&self, index: usize, records: Vec<Record>) -> Result<Vec<RecordRef>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let inserted: Vec<RecordRef> = {
            let mut items = self.items.borrow_mut();
            items.check_new_keys(&records)?;

            let at = index.min(items.order.len());
            let refs: Vec<RecordRef> = records.into_iter().map(Record::into_ref).collect();
            for record in &refs {
                let key = record.borrow().key();
                items.by_key.insert(key, record.clone());
            }
            items.order.splice(at..at, refs.iter().cloned());
            refs
        };

        let keys = inserted.iter().map(|r| r.borrow().key()).collect();
        self.emit(CollectionEvent::Added(keys));
        Ok(inserted)
    }

    /// Removes records by key and emits `Removed` for the keys that were present.
    ///
    /// Unknown keys are ignored. Returns the removed records.
    pub fn remove(&self, keys: &[RecordKey]) -> Vec<RecordRef> {
        let removed: Vec<RecordRef> = {
            let mut items = self.items.borrow_mut();
            let removed: Vec<RecordRef> = keys
                .iter()
                .filter_map(|key| items.by_key.remove(key))
                .collect();
            if !removed.is_empty() {
                let by_key = &items.by_key;
                let retained: Vec<RecordRef> = items
                    .order
                    .iter()
                    .filter(|r| by_key.contains_key(&r.borrow().key()))
                    .cloned()
                    .collect();
                items.order = retained;
            }
            removed
        };

        if !removed.is_empty() {
            let keys = removed.iter().map(|r| r.borrow().key()).collect();
            self.emit(CollectionEvent::Removed(keys));
        }
        removed
    }

    /// Mutates a record in place and emits `Updated`.
    ///
    /// The record key cannot change through this path.
    pub fn update<F, R>(&self, key: RecordKey, f: F) -> Result<R>
    where
        F: FnOnce(&mut Record) -> R,
    {
        let record = self.get_by_key(key).ok_or_else(|| Error::not_found(key))?;
        let result = f(&mut *record.borrow_mut());
        self.emit(CollectionEvent::Updated(key));
        Ok(result)
    }

    /// Emits `Updated` for a record that was mutated directly through its handle.
    pub fn mark_updated(&self, key: RecordKey) -> Result<()> {
        if !self.items.borrow().by_key.contains_key(&key) {
            return Err(Error::not_found(key));
        }
        self.emit(CollectionEvent::Updated(key));
        Ok(())
    }

    /// Replaces every record and emits `Refreshed`.
    pub fn load(&self, records: Vec<Record>) -> Result<()> {
        {
            let mut items = self.items.borrow_mut();
            let mut fresh = Items::default();
            fresh.check_new_keys(&records)?;
            for record in records {
                let key = record.key();
                let record = record.into_ref();
                fresh.by_key.insert(key, record.clone());
                fresh.order.push(record);
            }
            debug!(count = fresh.order.len(), "record store loaded");
            *items = fresh;
        }
        self.emit(CollectionEvent::Refreshed);
        Ok(())
    }

    /// Removes every record and emits `Refreshed`.
    pub fn clear(&self) {
        *self.items.borrow_mut() = Items::default();
        self.emit(CollectionEvent::Refreshed);
    }

    /// Stops emitting events until `resume_events` is called.
    pub fn suspend_events(&self) {
        self.suspended.set(true);
    }

    /// Resumes event emission.
    ///
    /// With `fire_refresh`, a single `Refreshed` event is emitted so listeners
    /// catch up with the changes made while suspended.
    pub fn resume_events(&self, fire_refresh: bool) {
        self.suspended.set(false);
        if fire_refresh {
            self.emit(CollectionEvent::Refreshed);
        }
    }

    /// Returns true while events are suspended.
    #[inline]
    pub fn events_suspended(&self) -> bool {
        self.suspended.get()
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Returns the record keys, in collection order.
    pub fn keys(&self) -> Vec<RecordKey> {
        self.items.borrow().order.iter().map(|r| r.borrow().key()).collect()
    }

    fn emit(&self, event: CollectionEvent) {
        if self.suspended.get() {
            return;
        }
        // Listeners run without any borrow held so they can read the store.
        let listeners = self.listeners.borrow().snapshot();
        for listener in listeners {
            listener(&event);
        }
    }
}

impl MasterCollection for RecordStore {
    fn records(&self) -> Vec<RecordRef> {
        self.items.borrow().order.clone()
    }

    fn get_by_key(&self, key: RecordKey) -> Option<RecordRef> {
        self.items.borrow().by_key.get(&key).cloned()
    }

    fn len(&self) -> usize {
        self.items.borrow().order.len()
    }

    fn subscribe(&self, listener: Box<dyn Fn(&CollectionEvent)>) -> ListenerId {
        self.listeners.borrow_mut().subscribe(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use vista_core::{same_record, Value};

    fn person(key: RecordKey, age: i64) -> Record {
        Record::new(key).with_field("Age", age)
    }

    fn recording_store() -> (RecordStore, Rc<RefCell<Vec<CollectionEvent>>>) {
        let store = RecordStore::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        store.subscribe(Box::new(move |e: &CollectionEvent| events_clone.borrow_mut().push(e.clone())));
        (store, events)
    }

    #[test]
    fn test_record_store_add() {
        let (store, events) = recording_store();
        store.add(vec![person(1, 25), person(2, 11)]).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.keys(), vec![1, 2]);
        assert_eq!(*events.borrow(), vec![CollectionEvent::Added(vec![1, 2])]);
    }

    #[test]
    fn test_record_store_add_duplicate_key() {
        let (store, events) = recording_store();
        store.add(vec![person(1, 25)]).unwrap();

        let err = store.add(vec![person(2, 30), person(1, 40)]).unwrap_err();
        assert_eq!(err, Error::duplicate_key(1));
        assert_eq!(store.keys(), vec![1]);

        let err = store.add(vec![person(3, 30), person(3, 40)]).unwrap_err();
        assert_eq!(err, Error::duplicate_key(3));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_record_store_add_empty_is_silent() {
        let (store, events) = recording_store();
        store.add(vec![]).unwrap();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_record_store_insert_at_index() {
        let store = RecordStore::with_records(vec![person(1, 25), person(2, 11)]).unwrap();
        store.insert(1, person(3, 40)).unwrap();
        store.insert(99, person(4, 50)).unwrap();
        assert_eq!(store.keys(), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_record_store_remove() {
        let store = RecordStore::with_records(vec![person(1, 25), person(2, 11), person(3, 7)]).unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        store.subscribe(Box::new(move |e: &CollectionEvent| events_clone.borrow_mut().push(e.clone())));

        let removed = store.remove(&[2, 99]);
        assert_eq!(removed.len(), 1);
        assert_eq!(store.keys(), vec![1, 3]);
        assert!(store.get_by_key(2).is_none());
        assert_eq!(*events.borrow(), vec![CollectionEvent::Removed(vec![2])]);

        // Nothing removed, nothing emitted
        store.remove(&[42]);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_record_store_update() {
        let (store, events) = recording_store();
        store.add(vec![person(1, 25)]).unwrap();
        let handle = store.get_by_key(1).unwrap();

        let previous = store.update(1, |r| r.set("Age", 26i64)).unwrap();
        assert_eq!(previous, Some(Value::Int64(25)));
        assert_eq!(handle.borrow().get("Age"), Some(&Value::Int64(26)));
        assert_eq!(events.borrow().last(), Some(&CollectionEvent::Updated(1)));

        assert_eq!(store.update(9, |_| ()).unwrap_err(), Error::not_found(9));
    }

    #[test]
    fn test_record_store_mark_updated() {
        let (store, events) = recording_store();
        store.add(vec![person(1, 25)]).unwrap();

        store.get_by_key(1).unwrap().borrow_mut().set("Age", 30i64);
        store.mark_updated(1).unwrap();
        assert_eq!(events.borrow().last(), Some(&CollectionEvent::Updated(1)));
        assert!(store.mark_updated(2).is_err());
    }

    #[test]
    fn test_record_store_load_and_clear() {
        let (store, events) = recording_store();
        store.add(vec![person(1, 25)]).unwrap();

        store.load(vec![person(5, 1), person(6, 2)]).unwrap();
        assert_eq!(store.keys(), vec![5, 6]);
        assert!(store.get_by_key(1).is_none());

        assert!(store.load(vec![person(7, 1), person(7, 2)]).is_err());
        assert_eq!(store.keys(), vec![5, 6]);

        store.clear();
        assert!(store.is_empty());
        let events = events.borrow();
        assert_eq!(events[1], CollectionEvent::Refreshed);
        assert_eq!(events[2], CollectionEvent::Refreshed);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_record_store_suspend_resume() {
        let (store, events) = recording_store();
        store.suspend_events();
        assert!(store.events_suspended());

        store.add(vec![person(1, 25)]).unwrap();
        store.update(1, |r| r.set("Age", 30i64)).unwrap();
        assert!(events.borrow().is_empty());

        store.resume_events(true);
        assert_eq!(*events.borrow(), vec![CollectionEvent::Refreshed]);

        store.suspend_events();
        store.resume_events(false);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_record_store_listener_reads_store() {
        let store = Rc::new(RecordStore::new());
        let seen_len = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&store);
        let seen = seen_len.clone();
        store.subscribe(Box::new(move |_: &CollectionEvent| {
            if let Some(store) = weak.upgrade() {
                seen.set(store.len());
            }
        }));

        store.add(vec![person(1, 25), person(2, 30)]).unwrap();
        assert_eq!(seen_len.get(), 2);
    }

    #[test]
    fn test_record_store_unsubscribe() {
        let store = RecordStore::new();
        let id = store.subscribe(Box::new(|_: &CollectionEvent| {}));
        assert_eq!(store.listener_count(), 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_record_store_identity() {
        let store = RecordStore::new();
        let added = store.add(vec![person(1, 25)]).unwrap();
        assert!(same_record(&added[0], &store.get_by_key(1).unwrap()));
        assert!(same_record(&added[0], &store.records()[0]));
    }
}
