use std::time::Duration;

/// Public documentation site
pub const DOCS_BASE_URL: &str = "https://docs.rc.uab.edu";
/// Open OnDemand portal for Cheaha
pub const PORTAL_URL: &str = "https://rc.uab.edu";
/// Repository backing the documentation site
pub const GITHUB_REPO: &str = "uabrc/uabrc.github.io";
pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com";

pub const PRIMARY_BRANCH: &str = "main";
pub const FALLBACK_BRANCH: &str = "master";

/// Ceiling, in characters, applied to every tool response
pub const CHARACTER_LIMIT: usize = 25_000;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every tool invocation.
///
/// Built once at startup and never mutated afterwards, so it can be cloned
/// freely into concurrent requests.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// `owner/name` of the documentation repository
    pub github_repo: String,
    pub docs_base_url: String,
    pub portal_url: String,
    pub api_base_url: String,
    pub raw_base_url: String,
    pub primary_branch: String,
    pub fallback_branch: String,
    /// Forwarded as a bearer token to the search API only
    pub github_token: Option<String>,
    pub request_timeout: Duration,
    pub max_chars: usize,
    pub user_agent: String,
}

impl RelayConfig {
    /// Set the GitHub token. Blank tokens are treated as absent.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.github_token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    /// Point the search API at another host (trailing slashes are dropped)
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = trim_base(url);
        self
    }

    /// Point raw file retrieval at another host (trailing slashes are dropped)
    pub fn with_raw_base_url(mut self, url: &str) -> Self {
        self.raw_base_url = trim_base(url);
        self
    }

    pub fn with_docs_base_url(mut self, url: &str) -> Self {
        self.docs_base_url = trim_base(url);
        self
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Public site URL for a display path
    pub fn site_url(&self, display_path: &str) -> String {
        format!("{}/{}", self.docs_base_url, display_path)
    }

    /// Browsable repository URL
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.github_repo)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            github_repo: GITHUB_REPO.to_string(),
            docs_base_url: DOCS_BASE_URL.to_string(),
            portal_url: PORTAL_URL.to_string(),
            api_base_url: GITHUB_API_BASE.to_string(),
            raw_base_url: GITHUB_RAW_BASE.to_string(),
            primary_branch: PRIMARY_BRANCH.to_string(),
            fallback_branch: FALLBACK_BRANCH.to_string(),
            github_token: None,
            request_timeout: REQUEST_TIMEOUT,
            max_chars: CHARACTER_LIMIT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
