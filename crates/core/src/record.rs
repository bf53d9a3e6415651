//! Record structure for Vista collections.
//!
//! A `Record` is a keyed set of named field values. Records are shared between
//! a master collection and every view that contains them through `RecordRef`,
//! so a field update made through one handle is visible through all of them.

use crate::value::Value;
use core::cell::RefCell;
use hashbrown::HashMap;
use std::rc::Rc;

/// Stable identifier for a record, unique within one master collection.
pub type RecordKey = u64;

/// Shared handle to a record.
///
/// The master collection and its views hold clones of the same `Rc`; views
/// never copy records.
pub type RecordRef = Rc<RefCell<Record>>;

/// Returns true if both handles point at the same record instance.
#[inline]
pub fn same_record(a: &RecordRef, b: &RecordRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// A keyed record of named field values.
#[derive(Clone, Debug)]
pub struct Record {
    /// Stable key for this record.
    key: RecordKey,
    /// Version number for change detection. Incremented on each field update.
    version: u64,
    /// Field values by name.
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates an empty record with the given key.
    /// Version defaults to 1 for new records.
    pub fn new(key: RecordKey) -> Self {
        Self {
            key,
            version: 1,
            fields: HashMap::new(),
        }
    }

    /// Builder-style field assignment that does not bump the version.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Wraps this record in a shared handle.
    pub fn into_ref(self) -> RecordRef {
        Rc::new(RefCell::new(self))
    }

    /// Returns the record key.
    #[inline]
    pub fn key(&self) -> RecordKey {
        self.key
    }

    /// Returns the version number.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Gets the value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets a field value and increments the version.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.version = self.version.wrapping_add(1);
        self.fields.insert(name.into(), value.into())
    }

    /// Removes a field and increments the version if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let removed = self.fields.remove(name);
        if removed.is_some() {
            self.version = self.version.wrapping_add(1);
        }
        removed
    }

    /// Returns true if the record has a value for the field.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over `(name, value)` pairs in unspecified order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if this record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
