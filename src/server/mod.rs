use crate::document::PageReference;
use crate::error::RelayError;
use crate::format::{self, FormattedResponse, templates};
use crate::github::{GitHubConnector, SearchQuery};

mod tools;

pub use tools::{GetDocumentationPageRequest, SearchDocumentationRequest};

/// MCP server exposing the documentation tools.
///
/// Holds no per-call state: every invocation builds its own query or page
/// reference and shares only the read-only connector.
#[derive(Clone)]
pub struct DocsRelay {
    github: GitHubConnector,
}

impl DocsRelay {
    pub fn new(github: GitHubConnector) -> Self {
        Self { github }
    }

    pub async fn search_documentation_text(
        &self,
        term: &str,
        max_results: Option<i64>,
    ) -> FormattedResponse {
        let query = SearchQuery::new(term, max_results);
        let text = match self.github.search(&query).await {
            Ok(results) => format::render_search_results(&query, &results, self.github.config()),
            Err(e) => e.user_message(),
        };
        self.finish(text)
    }

    pub async fn documentation_page_text(&self, page_path: &str) -> FormattedResponse {
        let text = match self.fetch_documentation_page(page_path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("get_documentation_page failed: {}", e);
                e.user_message()
            }
        };
        self.finish(text)
    }

    async fn fetch_documentation_page(&self, page_path: &str) -> Result<String, RelayError> {
        let page = PageReference::parse(page_path)?;
        let fetched = self.github.fetch_page(&page.repo_path).await.ok_or_else(|| {
            RelayError::PageNotFound {
                repo_path: page.repo_path.clone(),
            }
        })?;
        tracing::debug!("{} served from {:?} branch", page.repo_path, fetched.source_branch);

        Ok(format::render_page(&page, &fetched.raw_text, self.github.config()))
    }

    pub fn support_info_text(&self) -> FormattedResponse {
        self.finish(templates::support_info(self.github.config()))
    }

    pub fn documentation_sections_text(&self) -> FormattedResponse {
        self.finish(templates::documentation_sections(self.github.config()))
    }

    pub fn cheaha_quick_start_text(&self) -> FormattedResponse {
        self.finish(templates::cheaha_quick_start(self.github.config()))
    }

    fn finish(&self, text: String) -> FormattedResponse {
        let response = FormattedResponse::new(text, self.github.config().max_chars);
        if response.truncated {
            tracing::info!("Response truncated to {} characters", self.github.config().max_chars);
        }
        response
    }
}
