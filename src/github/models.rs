//! Data models representing issue search results.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::rate_limit::RateLimitInfo;

/// One pull request as returned by the issue search API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchItem {
    /// Pull request number, unique within its repository.
    pub number: u64,
    /// Title of the pull request.
    #[serde(default)]
    pub title: String,
    /// Issue state (`open` or `closed`).
    pub state: String,
    /// HTML URL for displaying to a user.
    pub html_url: String,
    /// API URL of the repository the pull request targets.
    pub repository_url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Pull request specific fields, absent for plain issues.
    #[serde(default)]
    pub pull_request: Option<PullRequestLinks>,
}

impl SearchItem {
    /// Returns true when the pull request carries a merge timestamp.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.pull_request
            .as_ref()
            .is_some_and(|links| links.merged_at.is_some())
    }
}

/// The `pull_request` object nested in a search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequestLinks {
    /// Merge timestamp; `None` for open or closed-unmerged pull requests.
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// One page of search results together with its rate limit headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Items on this page, in API order.
    pub items: Vec<SearchItem>,
    /// Quota information reported alongside the page.
    pub rate_limit: RateLimitInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiSearchResponse {
    #[serde(default)]
    pub(super) items: Vec<SearchItem>,
}
