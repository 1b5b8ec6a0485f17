//! README persistence.
//!
//! Generated Markdown lives between two HTML comment markers. Everything
//! outside those markers belongs to the user and is carried over unchanged,
//! apart from an optional timestamp bracketed by a pair of timestamp markers.
//! Splicing is a pure function over strings; [`file`] adds the filesystem
//! reads and writes around it.

pub mod error;
pub mod file;
pub mod splice;

pub use error::ReadmeError;
pub use file::{default_readme, load_or_default, write};
pub use splice::{END_MARKER, Markers, START_MARKER, TIMESTAMP_MARKER, splice, stamp_timestamp};
