use serde_json::json;
use uab_rc_docs_mcp::config::RelayConfig;
use uab_rc_docs_mcp::format::truncation_notice;
use uab_rc_docs_mcp::github::GitHubConnector;
use uab_rc_docs_mcp::server::{DocsRelay, SearchDocumentationRequest};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn relay(server: &MockServer, config: RelayConfig) -> DocsRelay {
    let config = config
        .with_api_base_url(&server.uri())
        .with_raw_base_url(&server.uri());
    DocsRelay::new(GitHubConnector::new(config).unwrap())
}

#[tokio::test]
async fn test_search_lists_at_most_cap_items() {
    let server = MockServer::start().await;
    let items: Vec<_> = (0..8)
        .map(|i| {
            json!({
                "name": format!("gpu{i}.md"),
                "path": format!("docs/cheaha/gpu{i}.md"),
                "html_url": format!("https://github.com/uabrc/uabrc.github.io/blob/main/docs/cheaha/gpu{i}.md"),
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("per_page", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 8,
            "items": items,
        })))
        .mount(&server)
        .await;

    let response = relay(&server, RelayConfig::default())
        .search_documentation_text("gpu", Some(5))
        .await;

    assert!(!response.truncated);
    assert!(response.text.starts_with("Found 8 results for 'gpu':"));
    assert!(response.text.contains("5. **gpu4.md**"));
    assert!(!response.text.contains("6. **"));
    let urls: Vec<_> = response
        .text
        .lines()
        .filter_map(|line| line.trim().strip_prefix("URL: "))
        .collect();
    assert_eq!(urls.len(), 5);
    assert!(urls.iter().all(|url| url.starts_with("https://docs.rc.uab.edu/cheaha/gpu")));
}

#[tokio::test]
async fn test_search_clamps_oversized_cap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/code"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_count": 0, "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = relay(&server, RelayConfig::default())
        .search_documentation_text("gpu", Some(15))
        .await;

    assert!(response.text.starts_with("No results found for 'gpu'"));
}

#[tokio::test]
async fn test_search_rate_limit_is_reported_as_guidance() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/code"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API rate limit exceeded"))
        .mount(&server)
        .await;

    let response = relay(&server, RelayConfig::default())
        .search_documentation_text("gpu", None)
        .await;

    assert!(response.text.contains("rate limit exceeded"));
    assert!(response.text.contains("GITHUB_TOKEN"));
    assert!(!response.text.contains("403"));
}

#[tokio::test]
async fn test_get_page_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uabrc/uabrc.github.io/main/docs/slurm/tutorial.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# SLURM Tutorial\n\nUse sbatch."))
        .mount(&server)
        .await;

    let relay = relay(&server, RelayConfig::default());
    let first = relay.documentation_page_text("slurm/tutorial").await;
    let second = relay.documentation_page_text("slurm/tutorial").await;

    assert_eq!(first, second);
    assert!(first.text.starts_with("# Documentation Page: docs/slurm/tutorial.md\n"));
    assert!(first.text.contains("**URL:** https://docs.rc.uab.edu/slurm/tutorial\n"));
    assert!(first.text.contains("Use sbatch."));
}

#[tokio::test]
async fn test_get_page_uses_fallback_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uabrc/uabrc.github.io/master/docs/storage.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Storage"))
        .mount(&server)
        .await;

    let response = relay(&server, RelayConfig::default())
        .documentation_page_text("https://github.com/uabrc/uabrc.github.io/blob/master/docs/storage.md")
        .await;

    assert!(response.text.contains("# Storage"));
    assert!(!response.text.contains("Unable to fetch content"));
}

#[tokio::test]
async fn test_get_page_not_found_message() {
    let server = MockServer::start().await;

    let response = relay(&server, RelayConfig::default())
        .documentation_page_text("does/not/exist")
        .await;

    assert_eq!(
        response.text,
        "Error: Unable to fetch content from GitHub. The file may not exist at path: docs/does/not/exist.md"
    );
}

#[tokio::test]
async fn test_get_page_invalid_reference_message() {
    let server = MockServer::start().await;

    let response = relay(&server, RelayConfig::default())
        .documentation_page_text("https://example.com/docs/page")
        .await;

    assert!(response.text.starts_with("Error: URL provided is not a GitHub URL"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_page_rejects_parent_segments_without_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("INJECTED CONTENT"))
        .mount(&server)
        .await;

    let response = relay(&server, RelayConfig::default())
        .documentation_page_text("../../../../evil/repo/main/payload")
        .await;

    assert!(response.text.starts_with("Error: Page reference may not contain"));
    assert!(!response.text.contains("INJECTED CONTENT"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_search_request_accepts_loose_max_results() {
    let cases = [
        (json!({ "query": "gpu" }), None),
        (json!({ "query": "gpu", "max_results": 3 }), Some(3)),
        (json!({ "query": "gpu", "max_results": 5.0 }), Some(5)),
        (json!({ "query": "gpu", "max_results": "7" }), Some(7)),
        (json!({ "query": "gpu", "max_results": 1e30 }), Some(i64::MAX)),
        (json!({ "query": "gpu", "max_results": 18446744073709551615u64 }), Some(i64::MAX)),
        (json!({ "query": "gpu", "max_results": true }), None),
    ];

    for (body, expected) in cases {
        let request: SearchDocumentationRequest = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(request.requested_results(), expected, "body: {body}");
    }
}

#[tokio::test]
async fn test_long_page_is_truncated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/uabrc/uabrc.github.io/main/docs/big.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(5_000)))
        .mount(&server)
        .await;

    let response = relay(&server, RelayConfig::default().with_max_chars(1_000))
        .documentation_page_text("big")
        .await;

    assert!(response.truncated);
    assert_eq!(
        response.text.chars().count(),
        1_000 + truncation_notice(1_000).chars().count()
    );
}

#[tokio::test]
async fn test_static_tools() {
    let server = MockServer::start().await;
    let relay = relay(&server, RelayConfig::default());

    assert!(relay.support_info_text().text.contains("UAB Research Computing Support Information"));
    assert!(relay.documentation_sections_text().text.contains("Documentation Structure"));
    assert!(relay.cheaha_quick_start_text().text.contains("ssh YOUR_BLAZERID@cheaha.rc.uab.edu"));
    assert!(server.received_requests().await.unwrap().is_empty());
}
