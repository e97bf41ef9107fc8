//! End-to-end launcher tests against a mock Notion server.

use notion_launcher::{Launcher, LauncherConfig, OpenTarget, open_target_url};
use notion_search::{AllFailedPolicy, SearchConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, tokens: &str, policy: AllFailedPolicy) -> LauncherConfig {
    LauncherConfig {
        notion_token: tokens.to_string(),
        open_in: OpenTarget::App,
        search: SearchConfig {
            base_url: format!("{}/v1", server.uri()),
            timeout_seconds: 1,
            on_all_failed: policy,
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn query_produces_display_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Acme"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(header("Authorization", "Bearer secret_a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "object": "page",
                    "url": "https://www.notion.so/Design-Doc-1",
                    "parent": {"type": "page_id", "page_id": "p"},
                    "icon": {"type": "emoji", "emoji": "📄"},
                    "properties": {"title": {"type": "title", "title": [
                        {"plain_text": "Design"}, {"plain_text": " Doc"}
                    ]}}
                },
                {"object": "database", "url": "https://www.notion.so/Tasks-2", "title": []}
            ]
        })))
        .mount(&server)
        .await;

    let launcher = Launcher::start(config_for(&server, "secret_a", AllFailedPolicy::Empty))
        .await
        .expect("start");
    let items = launcher.query("design doc").await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Design Doc");
    assert_eq!(items[0].description, "Acme");
    assert_eq!(items[0].icon, "📄");

    // The stored URL stays https; only the handed-over URL is rewritten.
    let url = items[0].url.as_deref().expect("actionable");
    assert_eq!(url, "https://www.notion.so/Design-Doc-1");
    assert_eq!(
        open_target_url(url, launcher.open_in()),
        "notion://www.notion.so/Design-Doc-1"
    );
}

#[tokio::test]
async fn unreachable_workspaces_render_diagnostic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let launcher = Launcher::start(config_for(&server, "secret_a", AllFailedPolicy::Error))
        .await
        .expect("start");
    let items = launcher.query("roadmap").await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "AllWorkspacesUnreachable");
    assert!(items[0].description.contains("Unknown Workspace"));
    assert!(items[0].url.is_none());
}
