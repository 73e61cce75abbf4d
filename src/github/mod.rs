use anyhow::Result;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;

use crate::config::RelayConfig;
use crate::document::site_path;
use crate::error::RelayError;

/// Results returned when the caller does not ask for a specific number
pub const DEFAULT_MAX_RESULTS: usize = 5;
/// Upper bound on results per search; larger requests are clamped
pub const MAX_RESULTS: usize = 10;

const GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// A code search request scoped to the documentation repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub max_results: usize,
}

impl SearchQuery {
    /// Build a query, clamping the requested result count.
    ///
    /// Missing, zero and negative counts fall back to
    /// [`DEFAULT_MAX_RESULTS`]; anything above [`MAX_RESULTS`] is clamped.
    pub fn new(term: &str, max_results: Option<i64>) -> Self {
        let max_results = match max_results {
            Some(n) if n > 0 => (n as usize).min(MAX_RESULTS),
            _ => DEFAULT_MAX_RESULTS,
        };
        Self {
            term: term.to_string(),
            max_results,
        }
    }

    /// The `q` parameter sent to the search API
    pub fn compose(&self, repo: &str) -> String {
        format!("{} repo:{}", self.term, repo)
    }
}

/// A single code search hit, in upstream relevance order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub name: String,
    pub repo_path: String,
    pub repo_url: String,
}

impl SearchResultItem {
    fn from_json(item: &Value) -> Self {
        let field = |key: &str| item.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: field("name").unwrap_or_else(|| "Unknown".to_string()),
            repo_path: field("path").unwrap_or_default(),
            repo_url: field("html_url").unwrap_or_default(),
        }
    }

    /// Path of this file on the public documentation site
    pub fn site_path(&self) -> String {
        site_path(&self.repo_path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub total_count: u64,
    pub items: Vec<SearchResultItem>,
}

impl SearchResults {
    /// Read a search API response body, keeping at most `max_results` items.
    ///
    /// Missing or mistyped fields become empty defaults instead of failing
    /// the whole response.
    pub fn from_json(body: &Value, max_results: usize) -> Self {
        let total_count = body.get("total_count").and_then(Value::as_u64).unwrap_or(0);
        let items = body
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .take(max_results)
                    .map(SearchResultItem::from_json)
                    .collect()
            })
            .unwrap_or_default();

        Self { total_count, items }
    }
}

/// Which branch a page was served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub raw_text: String,
    pub source_branch: Branch,
}

/// Client for the GitHub code search API and raw file host
#[derive(Clone)]
pub struct GitHubConnector {
    client: Client,
    config: RelayConfig,
}

impl GitHubConnector {
    pub fn new(config: RelayConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;

        if config.github_token.is_some() {
            tracing::info!("Using personal access token for GitHub search API");
        }

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Run a code search against the documentation repository
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, RelayError> {
        let url = format!("{}/search/code", self.config.api_base_url);
        let q = query.compose(&self.config.github_repo);
        let per_page = query.max_results.to_string();
        tracing::info!("Searching documentation: {}", q);

        let mut request = self
            .client
            .get(&url)
            .query(&[("q", q.as_str()), ("per_page", per_page.as_str())])
            .header(header::ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.config.github_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Error searching documentation: {}", e);
            RelayError::SearchFailed {
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("HTTP error searching documentation: {} - {}", status, body);
            return Err(status_error(status));
        }

        let body: Value = response.json().await.map_err(|e| {
            tracing::error!("Malformed search response: {}", e);
            RelayError::SearchFailed {
                reason: format!("malformed response from GitHub: {e}"),
            }
        })?;

        Ok(SearchResults::from_json(&body, query.max_results))
    }

    /// Fetch raw markdown for a repository path.
    ///
    /// The primary branch is tried first and the fallback branch once after
    /// any miss. `None` means neither branch served the file.
    pub async fn fetch_page(&self, repo_path: &str) -> Option<FetchedPage> {
        let attempts = [
            (Branch::Primary, &self.config.primary_branch),
            (Branch::Fallback, &self.config.fallback_branch),
        ];

        for (source_branch, branch) in attempts {
            let url = self.raw_url(branch, repo_path);
            if source_branch == Branch::Fallback {
                tracing::info!("Retrying with {} branch: {}", branch, url);
            } else {
                tracing::info!("Fetching documentation from: {}", url);
            }

            if let Some(raw_text) = self.fetch_raw(&url).await {
                return Some(FetchedPage {
                    raw_text,
                    source_branch,
                });
            }
        }

        None
    }

    fn raw_url(&self, branch: &str, repo_path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.raw_base_url, self.config.github_repo, branch, repo_path
        )
    }

    async fn fetch_raw(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("{} returned {}", url, response.status());
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Failed to read body from {}: {}", url, e);
                None
            }
        }
    }
}

fn status_error(status: StatusCode) -> RelayError {
    match status {
        StatusCode::UNAUTHORIZED => RelayError::AuthFailed,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => RelayError::RateLimited,
        _ => RelayError::SearchFailed {
            reason: format!("HTTP {}", status.as_u16()),
        },
    }
}
