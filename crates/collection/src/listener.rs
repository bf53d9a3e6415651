//! Listener management for change notifications.
//!
//! `ListenerSet` keeps callbacks in registration order and hands out ids that
//! can be used to remove them again.

use indexmap::IndexMap;
use std::rc::Rc;

/// Unique identifier for a registered listener.
pub type ListenerId = u64;

/// Callback type for change notifications.
pub type Listener<E> = Rc<dyn Fn(&E)>;

/// An ordered set of listeners for events of type `E`.
pub struct ListenerSet<E> {
    /// Registered listeners, in registration order
    listeners: IndexMap<ListenerId, Listener<E>>,
    /// Next listener ID to assign
    next_id: ListenerId,
}

impl<E> Default for ListenerSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ListenerSet<E> {
    /// Creates an empty listener set.
    pub fn new() -> Self {
        Self {
            listeners: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Registers a listener.
    ///
    /// Returns the listener ID that can be used to remove it.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: Fn(&E) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, Rc::new(callback));
        id
    }

    /// Removes a listener by ID.
    ///
    /// Returns true if the listener was found and removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    /// Returns the current listeners, in registration order.
    ///
    /// Callers that dispatch while the set lives behind a `RefCell` should take
    /// this snapshot and release the borrow before invoking the callbacks, so a
    /// callback may subscribe or unsubscribe without a borrow conflict.
    pub fn snapshot(&self) -> Vec<Listener<E>> {
        self.listeners.values().cloned().collect()
    }

    /// Notifies every listener of the event.
    pub fn notify_all(&self, event: &E) {
        for listener in self.listeners.values() {
            listener(event);
        }
    }

    /// Returns the number of listeners.
    #[inline]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if there are no listeners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Removes all listeners.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    #[test]
    fn test_listener_set_subscribe() {
        let mut set: ListenerSet<u32> = ListenerSet::new();

        let id1 = set.subscribe(|_| {});
        let id2 = set.subscribe(|_| {});

        assert_eq!(id1, 1);
        assert_eq!(id2, 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_listener_set_unsubscribe() {
        let mut set: ListenerSet<u32> = ListenerSet::new();

        let id = set.subscribe(|_| {});
        assert!(set.unsubscribe(id));
        assert!(set.is_empty());

        assert!(!set.unsubscribe(id)); // Already removed
    }

    #[test]
    fn test_listener_set_notify_in_order() {
        let mut set: ListenerSet<u32> = ListenerSet::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s1 = seen.clone();
        let s2 = seen.clone();
        set.subscribe(move |e| s1.borrow_mut().push((1, *e)));
        set.subscribe(move |e| s2.borrow_mut().push((2, *e)));

        set.notify_all(&7);

        assert_eq!(*seen.borrow(), vec![(1, 7), (2, 7)]);
    }

    #[test]
    fn test_listener_set_snapshot_survives_unsubscribe() {
        let mut set: ListenerSet<u32> = ListenerSet::new();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();

        let id = set.subscribe(move |_| *c.borrow_mut() += 1);
        let snapshot = set.snapshot();
        set.unsubscribe(id);

        for listener in &snapshot {
            listener(&1);
        }
        assert_eq!(*count.borrow(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn test_listener_set_clear() {
        let mut set: ListenerSet<u32> = ListenerSet::new();
        set.subscribe(|_| {});
        set.subscribe(|_| {});
        set.clear();
        assert!(set.is_empty());
    }
}
