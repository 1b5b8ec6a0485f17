//! Top-level error returned by a run.

use thiserror::Error;

use crate::github::SearchError;
use crate::readme::ReadmeError;

/// Any condition that ends a run unsuccessfully.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Fetching pull requests failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Reading, splicing, or writing the README failed.
    #[error(transparent)]
    Readme(#[from] ReadmeError),
}
