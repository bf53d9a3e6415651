//! Vista Core - Record and value types shared by the Vista crates.
//!
//! This crate provides the foundational types for keyed record collections
//! and the views derived from them:
//!
//! - `Value`: Runtime field values (Null, Boolean, Int64, Float64, String)
//! - `Record`: A keyed set of named fields with a version counter
//! - `RecordRef`: The shared identity handle held by a master collection and its views
//! - `Error`: Error types for collection and view operations
//!
//! # Example
//!
//! ```rust
//! use vista_core::{Record, Value};
//!
//! let record = Record::new(1)
//!     .with_field("Name", "Stuart")
//!     .with_field("Age", 25i64);
//!
//! assert_eq!(record.key(), 1);
//! assert_eq!(record.get("Age"), Some(&Value::Int64(25)));
//! ```

mod error;
mod record;
mod value;

pub use error::{Error, Result};
pub use record::{same_record, Record, RecordKey, RecordRef};
pub use value::Value;
