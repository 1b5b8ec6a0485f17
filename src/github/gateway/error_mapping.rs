//! Maps search responses and transport failures into [`SearchError`].

use std::time::Duration;

use http::{HeaderMap, StatusCode};

use crate::github::error::SearchError;
use crate::github::models::{ApiSearchResponse, SearchPage};
use crate::github::rate_limit::RateLimitInfo;

use super::http_utils::extract_github_message;

/// Turns a completed response into a page of results or an error.
///
/// The quota from the rate-limit headers is logged before the status is
/// inspected, so failed responses report it too. `now` is the current Unix
/// time in seconds, used to compute the wait before an exhausted quota
/// resets.
///
/// # Errors
///
/// - [`SearchError::RateLimited`] for HTTP 403 with zero remaining quota.
/// - [`SearchError::Authentication`] for HTTP 401.
/// - [`SearchError::InvalidQuery`] for HTTP 422.
/// - [`SearchError::Api`] for any other non-200 status.
/// - [`SearchError::InvalidResponse`] when a 200 body is not valid JSON.
pub fn interpret_response(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
    now: u64,
) -> Result<SearchPage, SearchError> {
    let rate_limit = RateLimitInfo::from_headers(headers);
    if let Some(quota) = rate_limit.describe() {
        tracing::info!("Rate limit: {quota} remaining");
    }

    if status == StatusCode::FORBIDDEN && rate_limit.is_exhausted() {
        return Err(SearchError::RateLimited {
            wait_seconds: rate_limit.seconds_until_reset_from(now),
        });
    }

    if status != StatusCode::OK {
        return Err(map_status_error(status, body));
    }

    let decoded: ApiSearchResponse =
        serde_json::from_str(body).map_err(|error| SearchError::InvalidResponse {
            message: error.to_string(),
        })?;

    Ok(SearchPage {
        items: decoded.items,
        rate_limit,
    })
}

pub(super) fn map_status_error(status: StatusCode, body: &str) -> SearchError {
    let message = extract_github_message(body).unwrap_or_else(|| "unknown error".to_owned());
    match status {
        StatusCode::UNAUTHORIZED => SearchError::Authentication { message },
        StatusCode::UNPROCESSABLE_ENTITY => SearchError::InvalidQuery { message },
        _ => SearchError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

pub(super) fn map_transport_error(error: &reqwest::Error, timeout: Duration) -> SearchError {
    if error.is_timeout() {
        return SearchError::Timeout {
            seconds: timeout.as_secs(),
        };
    }

    SearchError::Network {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use http::{HeaderMap, HeaderValue, StatusCode};
    use rstest::rstest;

    use super::interpret_response;
    use crate::github::error::SearchError;

    const NOW: u64 = 1_700_000_000;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            let buffer = self.0.lock().expect("log buffer lock");
            String::from_utf8_lossy(&buffer).into_owned()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("log buffer lock")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_log<T>(action: impl FnOnce() -> T) -> (T, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let result = tracing::subscriber::with_default(subscriber, action);
        (result, log.contents())
    }

    fn quota_headers(remaining: &'static str, reset: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("30"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static(remaining));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static(reset));
        headers
    }

    #[rstest]
    fn exhausted_quota_reports_wait_time() {
        let headers = quota_headers("0", "1700000120");

        let result = interpret_response(StatusCode::FORBIDDEN, &headers, "{}", NOW);

        assert_eq!(result, Err(SearchError::RateLimited { wait_seconds: 120 }));
    }

    #[rstest]
    #[case::exhausted(StatusCode::FORBIDDEN, "0", "Rate limit: 0/30 remaining")]
    #[case::unauthorized(StatusCode::UNAUTHORIZED, "12", "Rate limit: 12/30 remaining")]
    #[case::server_error(StatusCode::BAD_GATEWAY, "5", "Rate limit: 5/30 remaining")]
    #[case::success(StatusCode::OK, "29", "Rate limit: 29/30 remaining")]
    fn quota_is_logged_for_every_response(
        #[case] status: StatusCode,
        #[case] remaining: &'static str,
        #[case] expected: &str,
    ) {
        let headers = quota_headers(remaining, "1700000120");

        let (_, output) = with_captured_log(|| {
            interpret_response(status, &headers, r#"{"items":[]}"#, NOW)
        });

        assert!(output.contains(expected), "unexpected log output:\n{output}");
    }

    #[rstest]
    fn missing_quota_headers_log_nothing() {
        let (_, output) = with_captured_log(|| {
            interpret_response(StatusCode::OK, &HeaderMap::new(), r#"{"items":[]}"#, NOW)
        });

        assert!(
            !output.contains("Rate limit"),
            "unexpected log output:\n{output}"
        );
    }

    #[rstest]
    fn reset_in_the_past_waits_zero_seconds() {
        let headers = quota_headers("0", "1699999000");

        let result = interpret_response(StatusCode::FORBIDDEN, &headers, "{}", NOW);

        assert_eq!(result, Err(SearchError::RateLimited { wait_seconds: 0 }));
    }

    #[rstest]
    fn forbidden_with_quota_left_is_an_api_error() {
        let headers = quota_headers("10", "1700000120");
        let body = r#"{"message":"Resource not accessible"}"#;

        let result = interpret_response(StatusCode::FORBIDDEN, &headers, body, NOW);

        assert_eq!(
            result,
            Err(SearchError::Api {
                status: 403,
                message: "Resource not accessible".to_owned(),
            })
        );
    }

    #[rstest]
    #[case::unauthorized(
        StatusCode::UNAUTHORIZED,
        SearchError::Authentication { message: "Bad credentials".to_owned() }
    )]
    #[case::unprocessable(
        StatusCode::UNPROCESSABLE_ENTITY,
        SearchError::InvalidQuery { message: "Bad credentials".to_owned() }
    )]
    #[case::server_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        SearchError::Api { status: 500, message: "Bad credentials".to_owned() }
    )]
    fn status_codes_map_to_specific_errors(
        #[case] status: StatusCode,
        #[case] expected: SearchError,
    ) {
        let body = r#"{"message":"Bad credentials"}"#;

        let result = interpret_response(status, &HeaderMap::new(), body, NOW);

        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn missing_message_uses_placeholder() {
        let result = interpret_response(StatusCode::BAD_GATEWAY, &HeaderMap::new(), "<html>", NOW);

        assert_eq!(
            result,
            Err(SearchError::Api {
                status: 502,
                message: "unknown error".to_owned(),
            })
        );
    }

    #[rstest]
    fn success_decodes_items_and_keeps_quota() {
        let headers = quota_headers("29", "1700000120");
        let body = r#"{"total_count":1,"items":[{
            "number": 7,
            "title": "Fix typo",
            "state": "open",
            "html_url": "https://github.com/org/proj/pull/7",
            "repository_url": "https://api.github.com/repos/org/proj",
            "created_at": "2025-01-01T00:00:00Z",
            "pull_request": {"merged_at": null}
        }]}"#;

        let page = interpret_response(StatusCode::OK, &headers, body, NOW)
            .expect("response should decode");

        assert_eq!(page.items.len(), 1);
        let item = page.items.first().expect("one item");
        assert_eq!(item.number, 7);
        assert!(!item.is_merged());
        assert_eq!(page.rate_limit.remaining(), Some(29));
    }

    #[rstest]
    fn success_with_garbage_body_is_invalid_response() {
        let result = interpret_response(StatusCode::OK, &HeaderMap::new(), "not json", NOW);

        assert!(
            matches!(result, Err(SearchError::InvalidResponse { .. })),
            "expected InvalidResponse, got {result:?}"
        );
    }
}
