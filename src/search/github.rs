//! GitHub repository search client
//!
//! One request per query: `GET {api_url}/search/repositories` with the query
//! in `q` and server-side sorting by stars, descending. Only the first page
//! of results is ever requested.

use super::{parse_search_body, FetchError, RepoSearch, SearchResultItem};
use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::time::Duration;

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Build a client from configuration
    ///
    /// A `request_timeout_secs` of 0 leaves requests without a timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        tracing::debug!(
            "Search client ready: {} (timeout: {}s)",
            config.api_url,
            config.request_timeout_secs
        );

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// Build the search request; reqwest takes care of escaping the query
    fn build_request(&self, query: &str) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/search/repositories",
            self.base_url.trim_end_matches('/')
        );

        self.client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .query(&[("q", query), ("sort", "stars"), ("order", "desc")])
    }

    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<Vec<SearchResultItem>, FetchError> {
        let status = response.status();

        if !status.is_success() {
            let remaining = header_u64(&response, "x-ratelimit-remaining");
            let reset_at = header_u64(&response, "x-ratelimit-reset");
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(classify_failure(status, remaining, reset_at, message));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read body: {}", e)))?;

        parse_search_body(&body)
    }
}

/// Map a non-success response to an error
///
/// Primary rate limit: 403 with zero remaining; secondary: 429.
fn classify_failure(
    status: StatusCode,
    remaining: Option<u64>,
    reset_at: Option<u64>,
    message: String,
) -> FetchError {
    let exhausted = status == StatusCode::FORBIDDEN && remaining == Some(0);
    if status == StatusCode::TOO_MANY_REQUESTS || exhausted {
        return FetchError::RateLimited { reset_at };
    }

    FetchError::Status {
        status: status.as_u16(),
        message,
    }
}

impl RepoSearch for GitHubClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, FetchError> {
        let response = self
            .build_request(query)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Self::parse_response(response).await
    }
}

fn header_u64(response: &reqwest::Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(api_url: &str) -> GitHubClient {
        let config = Config {
            api_url: api_url.to_string(),
            ..Config::default()
        };
        GitHubClient::new(&config).unwrap()
    }

    #[test]
    fn test_request_url_sorts_by_stars() {
        let client = client_for("https://api.github.com");
        let request = client.build_request("react").build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.github.com/search/repositories?q=react&sort=stars&order=desc"
        );
    }

    #[test]
    fn test_query_is_escaped() {
        let client = client_for("https://api.github.com/");
        let request = client.build_request("c++ lang&x=1").build().unwrap();

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(pairs[0], ("q".to_string(), "c++ lang&x=1".to_string()));
        assert_eq!(pairs.len(), 3);
        assert_eq!(request.url().path(), "/search/repositories");
    }

    #[test]
    fn test_accept_header_is_sent() {
        let client = client_for("https://api.github.com");
        let request = client.build_request("tokio").build().unwrap();

        assert_eq!(
            request.headers().get("accept").unwrap(),
            "application/vnd.github+json"
        );
    }

    #[test]
    fn test_429_is_rate_limited() {
        let err = classify_failure(
            StatusCode::TOO_MANY_REQUESTS,
            None,
            Some(1_700_000_000),
            String::new(),
        );
        assert!(matches!(
            err,
            FetchError::RateLimited {
                reset_at: Some(1_700_000_000)
            }
        ));
    }

    #[test]
    fn test_403_with_no_remaining_is_rate_limited() {
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            Some(0),
            None,
            "API rate limit exceeded".to_string(),
        );
        assert!(matches!(err, FetchError::RateLimited { reset_at: None }));
    }

    #[test]
    fn test_403_with_quota_left_is_status() {
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            Some(12),
            Some(1_700_000_000),
            "Resource not accessible".to_string(),
        );
        match err {
            FetchError::Status { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Resource not accessible");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[test]
    fn test_422_is_status() {
        let err = classify_failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(9),
            None,
            r#"{"message":"Validation Failed"}"#.to_string(),
        );
        assert!(matches!(err, FetchError::Status { status: 422, .. }));
        assert_eq!(
            err.to_string(),
            r#"Search API error (422): {"message":"Validation Failed"}"#
        );
    }
}
