//! Error types for Vista collections and views.

use crate::record::RecordKey;
use thiserror::Error;

/// Result type alias for Vista operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for collection and view operations.
///
/// Lookups that simply miss (unknown view name, record no longer in the
/// master collection) are reported as `None` by the accessors, not as errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A view predicate failed while testing a record.
    #[error("Predicate failed: {message}")]
    Predicate { message: String },
    /// A view could not be refreshed; its previous contents were kept.
    #[error("View {view} failed to refresh: {message}")]
    ViewRefresh { view: String, message: String },
    /// View names must be non-empty.
    #[error("Invalid view name: {name:?}")]
    InvalidViewName { name: String },
    /// A record with this key already exists in the collection.
    #[error("Duplicate record key: {key}")]
    DuplicateKey { key: RecordKey },
    /// No record with this key exists in the collection.
    #[error("Record not found: {key}")]
    NotFound { key: RecordKey },
}

impl Error {
    /// Creates a predicate failure.
    pub fn predicate(message: impl Into<String>) -> Self {
        Error::Predicate {
            message: message.into(),
        }
    }

    /// Wraps a failure that happened while refreshing the named view.
    pub fn view_refresh(view: impl Into<String>, source: &Error) -> Self {
        let message = match source {
            Error::Predicate { message } => message.clone(),
            other => other.to_string(),
        };
        Error::ViewRefresh {
            view: view.into(),
            message,
        }
    }

    /// Creates an invalid view name error.
    pub fn invalid_view_name(name: impl Into<String>) -> Self {
        Error::InvalidViewName { name: name.into() }
    }

    /// Creates a duplicate key error.
    pub fn duplicate_key(key: RecordKey) -> Self {
        Error::DuplicateKey { key }
    }

    /// Creates a not found error.
    pub fn not_found(key: RecordKey) -> Self {
        Error::NotFound { key }
    }
}
