//! Vista Views - Named predicate views over a master record collection.
//!
//! A view is a named subset of a master collection, defined by a predicate
//! and kept consistent with the master as it changes. Every add, remove,
//! update or bulk refresh of the master triggers a full recomputation of
//! every view, synchronously, before the mutating call returns.
//!
//! # Core Concepts
//!
//! - `ViewedCollection`: Owns the view registry for one master collection
//! - `ViewDescriptor`: A view's name, predicate and live store
//! - `ViewStore`: The live contents of a view, replaced in place on refresh
//! - `ViewRegistry`: Views keyed by name, in definition order
//! - `MasterAdapter`: Subscribes view refreshing to master change events
//! - `refresh_one` / `refresh_all`: The refresh engine
//!
//! Records in a view are the master's own records (`RecordRef` clones), so
//! field changes are visible through every handle.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use vista_collection::RecordStore;
//! use vista_core::Record;
//! use vista_views::{Predicate, ViewedCollection, ViewsConfig};
//!
//! let people = Rc::new(RecordStore::new());
//! let views = ViewedCollection::new(people.clone(), ViewsConfig::none());
//!
//! let minors = views
//!     .define_view("Minors", Predicate::new(|r| {
//!         r.get("Age").and_then(|v| v.as_i64()).map(|age| age < 20).unwrap_or(false)
//!     }))
//!     .unwrap();
//!
//! people
//!     .add(vec![
//!         Record::new(1).with_field("Age", 25i64),
//!         Record::new(2).with_field("Age", 11i64),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(minors.store().keys(), vec![2]);
//! ```

pub mod adapter;
pub mod change;
pub mod config;
pub mod container;
pub mod predicate;
pub mod refresh;
pub mod registry;
pub mod store;
pub mod view;

pub use adapter::{AdapterSubscription, MasterAdapter};
pub use change::StoreChange;
pub use config::{ViewDefinition, ViewsConfig};
pub use container::ViewedCollection;
pub use predicate::Predicate;
pub use refresh::{refresh_all, refresh_one, RefreshReport};
pub use registry::ViewRegistry;
pub use store::ViewStore;
pub use view::{ViewDescriptor, ViewHandle};

// Re-export commonly used types from dependencies
pub use vista_collection::{CollectionEvent, FilteredCollection, MasterCollection, RecordStore};
pub use vista_core::{Error, Record, RecordKey, RecordRef, Result, Value};
