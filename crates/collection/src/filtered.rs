//! Predicate filtering over ordered, keyed record sequences.
//!
//! `filter_by` scans a source once, evaluating the predicate exactly once per
//! record, and produces a new `FilteredCollection` holding the matching
//! records in source order. The records themselves are shared, not copied.

use hashbrown::HashMap;
use vista_core::{Record, RecordKey, RecordRef, Result};

/// An ordered, keyed collection produced by filtering a source.
#[derive(Clone, Debug, Default)]
pub struct FilteredCollection {
    /// Matching records, in source order
    items: Vec<RecordRef>,
    /// Record key -> position in `items`
    positions: HashMap<RecordKey, usize>,
}

impl FilteredCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, record: RecordRef) {
        let key = record.borrow().key();
        self.positions.insert(key, self.items.len());
        self.items.push(record);
    }

    /// Returns the records, in source order.
    #[inline]
    pub fn records(&self) -> &[RecordRef] {
        &self.items
    }

    /// Iterates over the records, in source order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordRef> {
        self.items.iter()
    }

    /// Returns the record keys, in source order.
    pub fn keys(&self) -> Vec<RecordKey> {
        self.items.iter().map(|r| r.borrow().key()).collect()
    }

    /// Looks up a record by key.
    pub fn get(&self, key: RecordKey) -> Option<&RecordRef> {
        self.positions.get(&key).map(|&i| &self.items[i])
    }

    /// Returns the position of a record by key.
    pub fn position(&self, key: RecordKey) -> Option<usize> {
        self.positions.get(&key).copied()
    }

    /// Returns true if a record with this key is present.
    #[inline]
    pub fn contains_key(&self, key: RecordKey) -> bool {
        self.positions.contains_key(&key)
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Filters this collection further, producing a new one.
    pub fn filter_by<F>(&self, predicate: F) -> Result<FilteredCollection>
    where
        F: FnMut(&Record) -> Result<bool>,
    {
        filter_by(&self.items, predicate)
    }
}

impl<'a> IntoIterator for &'a FilteredCollection {
    type Item = &'a RecordRef;
    type IntoIter = core::slice::Iter<'a, RecordRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Filters `source` by `predicate`, preserving order and record identity.
///
/// The predicate is called exactly once per source record. The source is not
/// modified. If the predicate fails, the error is returned and no collection
/// is produced.
pub fn filter_by<'a, I, F>(source: I, mut predicate: F) -> Result<FilteredCollection>
where
    I: IntoIterator<Item = &'a RecordRef>,
    F: FnMut(&Record) -> Result<bool>,
{
    let mut result = FilteredCollection::new();
    for record in source {
        let keep = predicate(&*record.borrow())?;
        if keep {
            result.push(record.clone());
        }
    }
    Ok(result)
}
