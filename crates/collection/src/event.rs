//! Change events emitted by a master collection.

use vista_core::RecordKey;

/// A change to a master collection.
///
/// Events are emitted after the mutation has been applied, so a listener that
/// reads the collection sees the post-mutation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionEvent {
    /// One or more records were inserted.
    Added(Vec<RecordKey>),
    /// One or more records were removed.
    Removed(Vec<RecordKey>),
    /// Fields of an existing record changed.
    Updated(RecordKey),
    /// The whole item set was replaced or reloaded.
    Refreshed,
}

impl CollectionEvent {
    /// Returns the keys this event names. `Refreshed` names none.
    pub fn keys(&self) -> &[RecordKey] {
        match self {
            CollectionEvent::Added(keys) | CollectionEvent::Removed(keys) => keys,
            CollectionEvent::Updated(key) => core::slice::from_ref(key),
            CollectionEvent::Refreshed => &[],
        }
    }

    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            CollectionEvent::Added(_) => "added",
            CollectionEvent::Removed(_) => "removed",
            CollectionEvent::Updated(_) => "updated",
            CollectionEvent::Refreshed => "refreshed",
        }
    }
}
