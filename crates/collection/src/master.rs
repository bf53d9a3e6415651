//! The contract a host collection satisfies so views can be derived from it.

use crate::event::CollectionEvent;
use crate::listener::ListenerId;
use vista_core::{RecordKey, RecordRef};

/// An ordered, keyed collection of records that reports its own changes.
///
/// Views only ever read through this trait; all mutation goes through the
/// implementing collection's own API.
pub trait MasterCollection {
    /// Returns the current records, in collection order.
    fn records(&self) -> Vec<RecordRef>;

    /// Looks up a record by its stable key.
    fn get_by_key(&self, key: RecordKey) -> Option<RecordRef>;

    /// Returns the number of records.
    fn len(&self) -> usize {
        self.records().len()
    }

    /// Returns true if the collection has no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers a listener for change events.
    fn subscribe(&self, listener: Box<dyn Fn(&CollectionEvent)>) -> ListenerId;

    /// Removes a listener. Returns true if it was registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}
