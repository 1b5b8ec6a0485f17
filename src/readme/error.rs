//! Error types for README loading, splicing, and writing.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while updating the README.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReadmeError {
    /// The file exists but could not be read.
    #[error("could not read {path}: {message}")]
    Read {
        /// File that failed to load.
        path: Utf8PathBuf,
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The file is not valid UTF-8 text.
    #[error("{path} encoding is not UTF-8")]
    NotUtf8 {
        /// File with undecodable content.
        path: Utf8PathBuf,
    },

    /// A required marker is absent.
    #[error("required marker {marker} not found in README")]
    MissingMarker {
        /// The marker that could not be found.
        marker: String,
    },

    /// The end marker appears before the start marker.
    #[error("marker {end} appears before {start} in README")]
    MarkersOutOfOrder {
        /// Start marker.
        start: String,
        /// End marker.
        end: String,
    },

    /// The merged text could not be written back.
    #[error("could not write {path}: {message}")]
    Write {
        /// File that failed to save.
        path: Utf8PathBuf,
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
