//! GitHub issue search client.
//!
//! This module pages through the issue search API for pull requests authored
//! by one user, surfaces the quota headers GitHub attaches to each response,
//! and maps failures into [`SearchError`] variants that the CLI can report
//! directly.

pub mod error;
pub mod gateway;
pub mod models;
pub mod pagination;
pub mod query;
pub mod rate_limit;
pub mod search;

pub use error::SearchError;
pub use gateway::{HttpSearchGateway, SearchGateway};
pub use models::{PullRequestLinks, SearchItem, SearchPage};
pub use pagination::PageCursor;
pub use query::{AccessToken, ApiBase, SearchQuery, Username};
pub use rate_limit::RateLimitInfo;
pub use search::PullRequestSearch;

#[cfg(test)]
pub use gateway::MockSearchGateway;
