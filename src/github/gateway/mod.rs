//! Gateway for loading issue search pages over HTTP.
//!
//! The [`SearchGateway`] trait isolates the network so the paginating search
//! and the pipeline can be exercised with mocks, while
//! [`HttpSearchGateway`] performs real blocking requests through `reqwest`.

use std::time::Duration;

use http::header::{ACCEPT, USER_AGENT};
use reqwest::blocking::Client;

use super::error::SearchError;
use super::models::SearchPage;
use super::pagination::PageCursor;
use super::query::{AccessToken, ApiBase, SearchQuery};

mod error_mapping;
mod http_utils;

pub use error_mapping::interpret_response;

/// Media type requested from the API.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const CLIENT_USER_AGENT: &str = concat!("prtally/", env!("CARGO_PKG_VERSION"));

/// Gateway that can load one page of issue search results.
#[cfg_attr(test, mockall::automock)]
pub trait SearchGateway {
    /// Fetch the page addressed by `cursor` for `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] for rate limiting, non-success statuses,
    /// transport failures, and undecodable bodies.
    fn search_page(&self, query: &SearchQuery, cursor: PageCursor)
    -> Result<SearchPage, SearchError>;
}

/// Blocking `reqwest` implementation of [`SearchGateway`].
#[derive(Debug, Clone)]
pub struct HttpSearchGateway {
    client: Client,
    endpoint: String,
    token: Option<AccessToken>,
    timeout: Duration,
}

impl HttpSearchGateway {
    /// Builds a gateway targeting `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Client`] when the HTTP client cannot be
    /// constructed.
    pub fn new(
        api_base: &ApiBase,
        token: Option<AccessToken>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|error| SearchError::Client {
                message: error.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: api_base.search_endpoint(),
            token,
            timeout,
        })
    }
}

impl SearchGateway for HttpSearchGateway {
    fn search_page(
        &self,
        query: &SearchQuery,
        cursor: PageCursor,
    ) -> Result<SearchPage, SearchError> {
        let terms = query.terms();
        let per_page = cursor.per_page().to_string();
        let page = cursor.page().to_string();
        let query_params = [
            ("q", terms.as_str()),
            ("per_page", per_page.as_str()),
            ("sort", SearchQuery::SORT),
            ("order", SearchQuery::ORDER),
            ("page", page.as_str()),
        ];

        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&query_params)
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .header(USER_AGENT, CLIENT_USER_AGENT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.value());
        }

        let response = request
            .send()
            .map_err(|error| error_mapping::map_transport_error(&error, self.timeout))?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .map_err(|error| error_mapping::map_transport_error(&error, self.timeout))?;

        interpret_response(status, &headers, &body, http_utils::unix_now())
    }
}
