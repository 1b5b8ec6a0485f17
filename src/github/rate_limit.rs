//! Rate limit information from GitHub API responses.
//!
//! GitHub includes `X-RateLimit-Limit`, `X-RateLimit-Remaining`, and
//! `X-RateLimit-Reset` on every response. Each header is parsed best-effort:
//! a missing or malformed value is recorded as unknown rather than failing the
//! request.

use std::time::{SystemTime, UNIX_EPOCH};

use http::HeaderMap;

/// Header carrying the maximum requests allowed in the current window.
pub const LIMIT_HEADER: &str = "x-ratelimit-limit";
/// Header carrying the remaining requests in the current window.
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
/// Header carrying the Unix timestamp at which the window resets.
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limit information extracted from GitHub API response headers.
///
/// # Example
///
/// ```
/// use prtally::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(Some(5000), Some(0), Some(0));
/// assert!(info.is_exhausted());
/// assert_eq!(info.seconds_until_reset_from(1_700_000_000), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: Option<u32>,
    remaining: Option<u32>,
    reset_at: Option<u64>,
}

impl RateLimitInfo {
    /// Creates a new rate limit info instance.
    #[must_use]
    pub const fn new(limit: Option<u32>, remaining: Option<u32>, reset_at: Option<u64>) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Parses the rate limit headers of a response.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: parse_header(headers, LIMIT_HEADER),
            remaining: parse_header(headers, REMAINING_HEADER),
            reset_at: parse_header(headers, RESET_HEADER),
        }
    }

    /// Returns the maximum requests allowed in the current window, if known.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the remaining requests in the current window, if known.
    #[must_use]
    pub const fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Returns the Unix timestamp when the rate limit resets, if known.
    #[must_use]
    pub const fn reset_at(&self) -> Option<u64> {
        self.reset_at
    }

    /// Returns true only when the remaining count is known to be zero.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.remaining, Some(0))
    }

    /// Seconds between `now` (Unix seconds) and the reset time.
    ///
    /// An unknown or already passed reset time yields zero.
    #[must_use]
    pub fn seconds_until_reset_from(&self, now: u64) -> u64 {
        self.reset_at.unwrap_or(0).saturating_sub(now)
    }

    /// Calculates seconds until the rate limit resets using the system clock.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);

        self.seconds_until_reset_from(now)
    }

    /// Formats the quota for progress output, e.g. `4999/5000`.
    ///
    /// Returns `None` when the remaining count is unknown.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        let remaining = self.remaining?;
        let limit = self
            .limit
            .map_or_else(|| "?".to_owned(), |limit| limit.to_string());
        Some(format!("{remaining}/{limit}"))
    }
}

fn parse_header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.trim().parse().ok())
}
