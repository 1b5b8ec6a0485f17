//! Identity wrappers and the search query for a user's pull requests.

use url::Url;

use super::error::SearchError;

/// Default public GitHub API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub login whose pull requests are summarised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validates that the username is non-blank and trims whitespace.
    ///
    /// Returns `None` for blank input.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the username.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns true when `owner` names this user, ignoring ASCII case.
    #[must_use]
    pub fn owns(&self, owner: &str) -> bool {
        self.0.eq_ignore_ascii_case(owner)
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validates that the token is non-blank and trims whitespace.
    ///
    /// Returns `None` for blank input so that an empty `GITHUB_TOKEN` behaves
    /// like an unset one.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Parsed API base URL with derived endpoint helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses an API base such as `https://api.github.com` or
    /// `https://ghe.example.com/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Client`] when the value is not an absolute
    /// HTTP(S) URL.
    pub fn parse(value: &str) -> Result<Self, SearchError> {
        let url = Url::parse(value.trim()).map_err(|error| SearchError::Client {
            message: format!("API base URL '{value}' is invalid: {error}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SearchError::Client {
                message: format!("API base URL '{value}' must use http or https"),
            });
        }
        Ok(Self(url))
    }

    /// Returns the base without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the issue search endpoint.
    #[must_use]
    pub fn search_endpoint(&self) -> String {
        format!("{}/search/issues", self.as_str())
    }

    /// Returns the prefix every repository API URL starts with.
    #[must_use]
    pub fn repository_prefix(&self) -> String {
        format!("{}/repos/", self.as_str())
    }
}

/// Search for every pull request authored by one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    author: Username,
}

impl SearchQuery {
    /// Sort key requested from the API.
    pub const SORT: &'static str = "created";
    /// Sort direction requested from the API.
    pub const ORDER: &'static str = "desc";

    /// Creates a query for pull requests authored by `author`.
    #[must_use]
    pub const fn authored_by(author: Username) -> Self {
        Self { author }
    }

    /// Returns the queried author.
    #[must_use]
    pub const fn author(&self) -> &Username {
        &self.author
    }

    /// Returns the `q` parameter, e.g. `author:octocat type:pr`.
    #[must_use]
    pub fn terms(&self) -> String {
        format!("author:{} type:pr", self.author.as_str())
    }
}
