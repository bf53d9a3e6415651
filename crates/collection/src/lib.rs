//! Vista Collection - Keyed record collections and change events.
//!
//! This crate provides the master-collection side of Vista:
//!
//! - `MasterCollection`: The contract a host collection must satisfy for views
//!   to be derived from it (ordered snapshot, key lookup, change events)
//! - `RecordStore`: An in-memory ordered, keyed collection implementing it
//! - `CollectionEvent`: Added / Removed / Updated / Refreshed notifications
//! - `FilteredCollection` and `filter_by`: Predicate filtering that preserves
//!   source order and record identity
//! - `ListenerSet`: Ordered callback registry used for change notifications
//!
//! # Example
//!
//! ```rust
//! use vista_collection::{filter_by, MasterCollection, RecordStore};
//! use vista_core::Record;
//!
//! let store = RecordStore::new();
//! store
//!     .add(vec![
//!         Record::new(1).with_field("Age", 25i64),
//!         Record::new(2).with_field("Age", 11i64),
//!     ])
//!     .unwrap();
//!
//! let records = store.records();
//! let adults = filter_by(&records, |r| {
//!     Ok(r.get("Age").and_then(|v| v.as_i64()).map(|age| age > 20).unwrap_or(false))
//! })
//! .unwrap();
//!
//! assert_eq!(adults.keys(), vec![1]);
//! ```

mod event;
mod filtered;
mod listener;
mod master;
mod record_store;

pub use event::CollectionEvent;
pub use filtered::{filter_by, FilteredCollection};
pub use listener::{Listener, ListenerId, ListenerSet};
pub use master::MasterCollection;
pub use record_store::RecordStore;
