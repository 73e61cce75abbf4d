use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use uab_rc_docs_mcp::config::{self, RelayConfig};
use uab_rc_docs_mcp::github::GitHubConnector;
use uab_rc_docs_mcp::server::DocsRelay;

#[cfg(feature = "trace")]
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Cli {
    /// A github personal access token forwarded to the code search API (optional)
    #[clap(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,
    /// The github repository backing the documentation site
    #[clap(long, default_value = config::GITHUB_REPO)]
    github_repo: String,
    /// Public documentation site used to build page URLs
    #[clap(long, default_value = config::DOCS_BASE_URL)]
    docs_base_url: String,
    /// GitHub REST API base URL
    #[clap(long, default_value = config::GITHUB_API_BASE)]
    api_base_url: String,
    /// Raw file host base URL
    #[clap(long, default_value = config::GITHUB_RAW_BASE)]
    raw_base_url: String,
    /// Per-request timeout in seconds
    #[clap(long, default_value_t = 30)]
    timeout_secs: u64,
    /// Maximum characters returned by any tool
    #[clap(long, default_value_t = config::CHARACTER_LIMIT)]
    max_chars: usize,
    /// Write logs to this file instead of stderr
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn relay_config(&self) -> RelayConfig {
        let mut config = RelayConfig::default()
            .with_token(self.github_token.clone())
            .with_docs_base_url(&self.docs_base_url)
            .with_api_base_url(&self.api_base_url)
            .with_raw_base_url(&self.raw_base_url)
            .with_max_chars(self.max_chars);
        config.github_repo = self.github_repo.clone();
        config.request_timeout = Duration::from_secs(self.timeout_secs);
        config
    }
}

/// You can inspect the server using the Model Context Protocol Inspector.
/// npx @modelcontextprotocol/inspector cargo run -p uab-rc-docs-mcp

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // stdout carries the MCP transport, so logs go to stderr or a file
    #[cfg(feature = "trace")]
    {
        let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
        match &args.log_file {
            Some(path) => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::fs::File::create(path)?)
                .with_ansi(false)
                .init(),
            None => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init(),
        }
    }

    tracing::info!("Starting UAB Research Computing Documentation MCP Server");

    let config = args.relay_config();
    tracing::info!("Serving documentation from {} ({})", config.docs_base_url, config.github_repo);
    let github = GitHubConnector::new(config)?;

    let service = DocsRelay::new(github)
        .serve(stdio()).await.inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
