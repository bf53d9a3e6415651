//! Refresh engine.
//!
//! Every refresh is a full rescan: the view's predicate is evaluated against
//! each record of the master collection's current snapshot and the store
//! contents are replaced with the matching records, in master order.

use crate::change::StoreChange;
use crate::view::ViewDescriptor;
use std::rc::Rc;
use tracing::{trace, warn};
use vista_collection::{filter_by, MasterCollection};
use vista_core::{Error, Result};

/// Outcome of refreshing a set of views.
#[derive(Debug, Default)]
pub struct RefreshReport {
    /// Views whose contents were replaced, in refresh order
    pub refreshed: Vec<String>,
    /// Views that failed; each kept its previous contents
    pub failures: Vec<Error>,
}

impl RefreshReport {
    /// Returns true if every view refreshed.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of views attempted.
    #[inline]
    pub fn attempted(&self) -> usize {
        self.refreshed.len() + self.failures.len()
    }
}

/// Recomputes one view from the master collection.
///
/// On failure the store keeps its previous contents and no observer is
/// notified.
pub fn refresh_one(descriptor: &ViewDescriptor, master: &dyn MasterCollection) -> Result<StoreChange> {
    let records = master.records();
    let predicate = descriptor.predicate();
    let next = filter_by(&records, |record| predicate.test(record))
        .map_err(|err| Error::view_refresh(descriptor.name(), &err))?;

    let change = descriptor.store().replace(next);
    trace!(
        view = descriptor.name(),
        len = change.len,
        added = change.added.len(),
        removed = change.removed.len(),
        "view refreshed"
    );
    Ok(change)
}

/// Recomputes every view, in the given order.
///
/// A failing view does not stop the pass; its error is logged and reported.
pub fn refresh_all(descriptors: &[Rc<ViewDescriptor>], master: &dyn MasterCollection) -> RefreshReport {
    let mut report = RefreshReport::default();
    for descriptor in descriptors {
        match refresh_one(descriptor, master) {
            Ok(_) => report.refreshed.push(descriptor.name().to_string()),
            Err(err) => {
                warn!(view = descriptor.name(), error = %err, "view refresh failed");
                report.failures.push(err);
            }
        }
    }
    report
}
