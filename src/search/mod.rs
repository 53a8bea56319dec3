//! Repository search: result types, errors, and the search abstraction
//!
//! The controller talks to a [`RepoSearch`] implementation rather than to
//! reqwest directly, so the whole input → debounce → search → dropdown flow
//! can be driven by a test double.
//!
//! ```text
//! RepoSearch trait
//! ├── GitHubClient (GET /search/repositories, sorted by stars)
//! └── test doubles (canned responses, recorded queries)
//! ```

mod github;

pub use github::GitHubClient;

use serde::Deserialize;
use std::fmt;
use std::future::Future;

/// A single repository suggestion from the search endpoint
///
/// Lives only as long as the dropdown that displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub id: u64,
    pub name: String,
    /// Owner login
    pub owner: String,
    pub stars: u64,
}

/// Search endpoint response format
#[derive(Debug, Deserialize)]
pub struct GitHubSearchResponse {
    pub items: Vec<GitHubRepo>,
}

#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub owner: GitHubOwner,
    pub stargazers_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct GitHubOwner {
    pub login: String,
}

impl From<GitHubRepo> for SearchResultItem {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            owner: repo.owner.login,
            stars: repo.stargazers_count,
        }
    }
}

/// Errors that can occur while fetching search results
///
/// Callers treat every variant as "no results": the dropdown stays hidden.
#[derive(Debug)]
pub enum FetchError {
    /// Connection, TLS, or timeout failure
    Network(String),
    /// The endpoint's rate limit is exhausted (reset is a unix timestamp)
    RateLimited { reset_at: Option<u64> },
    /// Non-success status from the endpoint
    Status { status: u16, message: String },
    /// Body was not the expected JSON shape
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::RateLimited { reset_at } => {
                if let Some(reset) = reset_at {
                    write!(f, "Rate limited until {}", reset)
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::Status { status, message } => {
                write!(f, "Search API error ({}): {}", status, message)
            }
            Self::Decode(msg) => write!(f, "Failed to parse search response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can answer a repository query
///
/// Results come back in the order the backend ranked them; implementations
/// must not re-sort.
pub trait RepoSearch: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchResultItem>, FetchError>> + Send;
}

/// Parse a search response body into result items
pub fn parse_search_body(body: &[u8]) -> Result<Vec<SearchResultItem>, FetchError> {
    let response: GitHubSearchResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(response
        .items
        .into_iter()
        .map(SearchResultItem::from)
        .collect())
}
