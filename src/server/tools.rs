use rmcp::model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use serde::Deserialize;
use serde_json::Value;

use rmcp::{Error as McpError, ServerHandler, schemars, tool};

use super::DocsRelay;
use crate::format::FormattedResponse;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDocumentationRequest {
    #[schemars(description = "the search term or phrase to look for in the documentation")]
    pub query: String,

    #[serde(default)]
    #[schemars(description = "maximum number of results to return (default: 5, max: 10)")]
    pub max_results: Option<Value>,
}

impl SearchDocumentationRequest {
    /// Requested result count, read leniently so that `5.0`, `"5"` or an
    /// out-of-range number still reach clamping instead of failing the call.
    pub fn requested_results(&self) -> Option<i64> {
        match self.max_results.as_ref()? {
            // float to int casts saturate
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f as i64),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDocumentationPageRequest {
    #[schemars(
        description = "path of the page, e.g. \"cheaha/slurm/slurm_tutorial\", \"docs/cheaha/slurm/slurm_tutorial.md\", or a GitHub file URL"
    )]
    pub page_path: String,
}

fn text_result(response: FormattedResponse) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(response.text)]))
}

#[tool(tool_box)]
impl DocsRelay {
    #[tool(
        description = "Search the UAB Research Computing documentation for pages about Cheaha, SLURM, software, storage, policies and support. Returns titles, site URLs and repository paths."
    )]
    async fn search_documentation(
        &self,
        #[tool(aggr)] request: SearchDocumentationRequest,
    ) -> Result<CallToolResult, McpError> {
        let max_results = request.requested_results();
        text_result(self.search_documentation_text(&request.query, max_results).await)
    }

    #[tool(
        description = "Retrieve the full markdown content of a documentation page. Accepts a site path, a repository path under docs/, or a GitHub file URL."
    )]
    async fn get_documentation_page(
        &self,
        #[tool(aggr)] GetDocumentationPageRequest { page_path }: GetDocumentationPageRequest,
    ) -> Result<CallToolResult, McpError> {
        text_result(self.documentation_page_text(&page_path).await)
    }

    #[tool(description = "Get contact information, office hours and support channels for UAB Research Computing")]
    async fn get_support_info(&self) -> Result<CallToolResult, McpError> {
        text_result(self.support_info_text())
    }

    #[tool(description = "List the main sections and categories of the UAB Research Computing documentation")]
    async fn list_documentation_sections(&self) -> Result<CallToolResult, McpError> {
        text_result(self.documentation_sections_text())
    }

    #[tool(description = "Get quick start information for accessing and using the Cheaha HPC cluster")]
    async fn get_cheaha_quick_start(&self) -> Result<CallToolResult, McpError> {
        text_result(self.cheaha_quick_start_text())
    }
}

#[tool(tool_box)]
impl ServerHandler for DocsRelay {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server provides access to the UAB Research Computing documentation (https://docs.rc.uab.edu). Use 'search_documentation' to find pages, 'get_documentation_page' to read one, and 'get_support_info', 'list_documentation_sections' or 'get_cheaha_quick_start' for overviews.".to_string()),
        }
    }
}
