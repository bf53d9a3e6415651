//! Notification sent to view store observers after a refresh.

use hashbrown::HashSet;
use vista_collection::FilteredCollection;
use vista_core::RecordKey;

/// The effect of one refresh on a view store.
///
/// Exactly one `StoreChange` is delivered per refresh, after the new contents
/// are in place. Observers never see an intermediate empty store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreChange {
    /// Keys that joined the view, in view order
    pub added: Vec<RecordKey>,
    /// Keys that left the view, in previous view order
    pub removed: Vec<RecordKey>,
    /// Number of records in the view after the refresh
    pub len: usize,
}

impl StoreChange {
    /// Computes the change between two contents of a store.
    pub fn between(previous: &FilteredCollection, current: &FilteredCollection) -> Self {
        let before: HashSet<RecordKey> = previous.keys().into_iter().collect();
        let after = current.keys();
        let after_set: HashSet<RecordKey> = after.iter().copied().collect();

        Self {
            added: after.into_iter().filter(|k| !before.contains(k)).collect(),
            removed: previous
                .keys()
                .into_iter()
                .filter(|k| !after_set.contains(k))
                .collect(),
            len: current.len(),
        }
    }

    /// Returns true if membership did not change.
    ///
    /// Records that stayed in the view may still have changed fields.
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
