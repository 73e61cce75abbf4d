use std::fmt::Write as _;

use crate::config::RelayConfig;
use crate::document::PageReference;
use crate::github::{SearchQuery, SearchResults};

pub mod templates;

/// Rendered text of a tool call, after the character ceiling was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResponse {
    pub text: String,
    pub truncated: bool,
}

impl FormattedResponse {
    /// Cut `text` to `max_chars` characters, appending [`truncation_notice`]
    /// when anything was dropped. The cut ignores word and line boundaries.
    pub fn new(text: String, max_chars: usize) -> Self {
        let cut = text.char_indices().nth(max_chars).map(|(byte_index, _)| byte_index);
        match cut {
            Some(byte_index) => {
                let mut text = text;
                text.truncate(byte_index);
                text.push_str(&truncation_notice(max_chars));
                Self {
                    text,
                    truncated: true,
                }
            }
            None => Self {
                text,
                truncated: false,
            },
        }
    }
}

pub fn truncation_notice(max_chars: usize) -> String {
    format!(
        "\n\n[Response truncated at {max_chars} characters. Narrow the request, for example with a more specific search term or a single page path.]"
    )
}

/// Numbered list of search hits with their site and repository locations
pub fn render_search_results(
    query: &SearchQuery,
    results: &SearchResults,
    config: &RelayConfig,
) -> String {
    if results.items.is_empty() {
        return format!(
            "No results found for '{}' in the UAB Research Computing documentation.",
            query.term
        );
    }

    let mut out = format!(
        "Found {} results for '{}':\n",
        results.total_count, query.term
    );

    for (i, item) in results.items.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. **{}**\n   URL: {}\n   Repository: {}\n   Path: {}\n",
            i + 1,
            item.name,
            config.site_url(&item.site_path()),
            item.repo_url,
            item.repo_path,
        );
    }

    out.push_str(
        "\n💡 Tip: Use the 'get_documentation_page' tool to retrieve the full content of a specific page.",
    );
    out
}

/// Page heading, site URL, raw markdown body and source footer
pub fn render_page(page: &PageReference, body: &str, config: &RelayConfig) -> String {
    format!(
        "# Documentation Page: {repo_path}\n\
         **URL:** {url}\n\
         \n\
         ---\n\
         \n\
         {body}\n\
         \n\
         ---\n\
         \n\
         **Source:** UAB Research Computing Documentation\n\
         **Base URL:** {base}\n",
        repo_path = page.repo_path,
        url = config.site_url(&page.display_path),
        base = config.docs_base_url,
    )
}
