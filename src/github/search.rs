//! Paginating facade over a [`SearchGateway`].

use super::error::SearchError;
use super::gateway::SearchGateway;
use super::models::SearchItem;
use super::pagination::PageCursor;
use super::query::SearchQuery;

/// Collects every page of a pull request search using a gateway.
pub struct PullRequestSearch<'client, Gateway>
where
    Gateway: SearchGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestSearch<'client, Gateway>
where
    Gateway: SearchGateway,
{
    /// Create a new search facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load all results for `query`, one page at a time.
    ///
    /// Pages are requested serially until a page returns fewer items than the
    /// page size.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from the underlying gateway; results from
    /// earlier pages are discarded.
    pub fn fetch_all(&self, query: &SearchQuery) -> Result<Vec<SearchItem>, SearchError> {
        let mut items = Vec::new();
        let mut cursor = PageCursor::first();

        loop {
            let page = self.client.search_page(query, cursor)?;

            let returned = page.items.len();
            tracing::debug!(page = cursor.page(), returned, "fetched search page");
            items.extend(page.items);

            if !cursor.has_next_after(returned) {
                break;
            }
            cursor = cursor.next();
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mockall::Sequence;
    use mockall::predicate::{always, eq, function};
    use rstest::{fixture, rstest};

    use super::PullRequestSearch;
    use crate::github::error::SearchError;
    use crate::github::gateway::MockSearchGateway;
    use crate::github::models::{SearchItem, SearchPage};
    use crate::github::pagination::PageCursor;
    use crate::github::query::{SearchQuery, Username};
    use crate::github::rate_limit::RateLimitInfo;

    #[fixture]
    fn query() -> SearchQuery {
        SearchQuery::authored_by(Username::new("octocat").expect("username should be valid"))
    }

    fn page_of(count: u64, first_number: u64) -> SearchPage {
        let items = (0..count)
            .map(|offset| {
                let number = first_number + offset;
                SearchItem {
                    number,
                    title: format!("PR {number}"),
                    state: "open".to_owned(),
                    html_url: format!("https://github.com/org/proj/pull/{number}"),
                    repository_url: "https://api.github.com/repos/org/proj".to_owned(),
                    created_at: Utc
                        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
                        .single()
                        .expect("valid timestamp"),
                    pull_request: None,
                }
            })
            .collect();
        SearchPage {
            items,
            rate_limit: RateLimitInfo::new(Some(30), Some(29), None),
        }
    }

    fn expect_page(
        gateway: &mut MockSearchGateway,
        sequence: &mut Sequence,
        page: u32,
        result: SearchPage,
    ) {
        gateway
            .expect_search_page()
            .with(
                always(),
                function(move |cursor: &PageCursor| cursor.page() == page),
            )
            .times(1)
            .in_sequence(sequence)
            .return_once(move |_, _| Ok(result));
    }

    #[rstest]
    fn stops_after_first_short_page(query: SearchQuery) {
        let mut gateway = MockSearchGateway::new();
        let mut sequence = Sequence::new();
        expect_page(&mut gateway, &mut sequence, 1, page_of(100, 1));
        expect_page(&mut gateway, &mut sequence, 2, page_of(100, 101));
        expect_page(&mut gateway, &mut sequence, 3, page_of(7, 201));

        let items = PullRequestSearch::new(&gateway)
            .fetch_all(&query)
            .expect("search should succeed");

        assert_eq!(items.len(), 207);
        assert_eq!(items.first().map(|item| item.number), Some(1));
        assert_eq!(items.last().map(|item| item.number), Some(207));
    }

    #[rstest]
    fn stops_at_empty_page_after_exactly_full_pages(query: SearchQuery) {
        let mut gateway = MockSearchGateway::new();
        let mut sequence = Sequence::new();
        expect_page(&mut gateway, &mut sequence, 1, page_of(100, 1));
        expect_page(&mut gateway, &mut sequence, 2, page_of(0, 0));

        let items = PullRequestSearch::new(&gateway)
            .fetch_all(&query)
            .expect("search should succeed");

        assert_eq!(items.len(), 100);
    }

    #[rstest]
    fn propagates_gateway_failures(query: SearchQuery) {
        let mut gateway = MockSearchGateway::new();
        gateway
            .expect_search_page()
            .with(eq(query.clone()), always())
            .times(1)
            .return_once(|_, _| Err(SearchError::RateLimited { wait_seconds: 120 }));

        let result = PullRequestSearch::new(&gateway).fetch_all(&query);

        assert_eq!(result, Err(SearchError::RateLimited { wait_seconds: 120 }));
    }
}
