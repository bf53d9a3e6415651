//! View membership predicates.

use core::fmt;
use std::rc::Rc;
use vista_core::{Record, Result};

/// A shared test deciding whether a record belongs to a view.
///
/// Predicates are evaluated once per master record on every refresh, so they
/// should be deterministic for a given record and must not mutate it.
#[derive(Clone)]
pub struct Predicate(Rc<dyn Fn(&Record) -> Result<bool>>);

impl Predicate {
    /// Creates a predicate that cannot fail.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Record) -> bool + 'static,
    {
        Self(Rc::new(move |record| Ok(test(record))))
    }

    /// Creates a predicate that may fail for some records.
    ///
    /// A failure aborts the refresh of the view using it; other views are
    /// unaffected.
    pub fn fallible<F>(test: F) -> Self
    where
        F: Fn(&Record) -> Result<bool> + 'static,
    {
        Self(Rc::new(test))
    }

    /// Matches every record.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    /// Matches no record.
    pub fn none() -> Self {
        Self::new(|_| false)
    }

    /// Tests a record.
    #[inline]
    pub fn test(&self, record: &Record) -> Result<bool> {
        (self.0)(record)
    }

    /// Returns true if both values share the same underlying function.
    pub fn ptr_eq(&self, other: &Predicate) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
