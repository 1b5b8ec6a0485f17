//! Prtally library crate summarising a user's open source pull requests.
//!
//! The library pages through the GitHub issue search API for pull requests a
//! user authored, keeps those opened against other people's repositories that
//! are open or merged, renders them as a Markdown summary, and splices that
//! summary into a README between HTML comment markers.

pub mod config;
pub mod contributions;
pub mod error;
pub mod github;
pub mod logging;
pub mod pipeline;
pub mod readme;

pub use config::{PrtallyConfig, RunConfig};
pub use error::RunError;
pub use github::{
    AccessToken, ApiBase, HttpSearchGateway, PullRequestSearch, SearchError, SearchGateway,
    SearchItem, SearchQuery, Username,
};
pub use pipeline::{RunSummary, run, run_at};
pub use readme::ReadmeError;
