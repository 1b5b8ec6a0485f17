//! Error types exposed by the GitHub search layer.

use thiserror::Error;

/// Errors surfaced while querying the GitHub issue search API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The response reported an exhausted quota together with HTTP 403.
    #[error("rate limited by GitHub, try again in {wait_seconds} seconds")]
    RateLimited {
        /// Seconds until the quota window resets, never negative.
        wait_seconds: u64,
    },

    /// GitHub rejected the credential (HTTP 401).
    #[error("invalid or expired GitHub token: {message}")]
    Authentication {
        /// GitHub error message returned with the response.
        message: String,
    },

    /// GitHub refused the search query itself (HTTP 422).
    #[error("invalid search query: {message}")]
    InvalidQuery {
        /// GitHub error message returned with the response.
        message: String,
    },

    /// Any other non-success HTTP status.
    #[error("GitHub API error: HTTP {status}: {message}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Response message, or a placeholder when the body carried none.
        message: String,
    },

    /// The request did not complete within the configured budget.
    #[error("request timed out after {seconds}s, please try again")]
    Timeout {
        /// Timeout budget in seconds.
        seconds: u64,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A successful response could not be decoded.
    #[error("unexpected search response: {message}")]
    InvalidResponse {
        /// Decoder error detail.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to configure HTTP client: {message}")]
    Client {
        /// Builder error detail.
        message: String,
    },
}
