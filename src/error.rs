use thiserror::Error;

/// Failures a tool can hit while talking to GitHub.
///
/// None of these ever reach the MCP client as a protocol error; the tool
/// layer renders them with [`RelayError::user_message`].
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid page reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("GitHub API authentication failed")]
    AuthFailed,

    #[error("search request failed: {reason}")]
    SearchFailed { reason: String },

    #[error("page not found: {repo_path}")]
    PageNotFound { repo_path: String },
}

impl RelayError {
    pub fn invalid_reference(reference: &str, reason: impl Into<String>) -> Self {
        Self::InvalidReference {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }

    /// Plain guidance shown to the caller in place of the raw failure
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidReference { reference, reason } => {
                format!("Error: {reason}: {reference}")
            }
            Self::RateLimited => "Error: GitHub API rate limit exceeded. Set GITHUB_TOKEN environment variable for higher rate limits.".to_string(),
            Self::AuthFailed => "Error: GitHub API authentication failed. Set GITHUB_TOKEN environment variable for authenticated access.".to_string(),
            Self::SearchFailed { reason } => format!("Error searching documentation: {reason}"),
            Self::PageNotFound { repo_path } => format!(
                "Error: Unable to fetch content from GitHub. The file may not exist at path: {repo_path}"
            ),
        }
    }
}
