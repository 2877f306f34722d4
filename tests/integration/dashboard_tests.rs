//! Integration tests for the dashboard
//!
//! A wiremock server plays the crawled site; the dashboard router is bound
//! to an ephemeral port and read back with reqwest.

use seedcrawl::config::{Config, CrawlConfig, OutputConfig};
use seedcrawl::dashboard::{router, spawn_crawl, DashboardEvent, DashboardState};
use std::net::SocketAddr;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_site() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Home</title></head><body><a href="/about">About</a></body></html>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>About</title></head><body>About us</body></html>"#,
        ))
        .mount(&server)
        .await;

    server
}

async fn start_dashboard(base_dir: &std::path::Path) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(DashboardState::new(base_dir));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_relay_sends_pages_then_complete() {
    let site = mock_site().await;
    let dir = TempDir::new().unwrap();

    let config = Config {
        crawler: CrawlConfig::new(site.uri()),
        output: OutputConfig {
            output_dir: dir.path().to_path_buf(),
            report_name: "relay".to_string(),
        },
    };

    let mut rx = spawn_crawl(config);
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    assert_eq!(events.len(), 3);
    match (&events[0], &events[1]) {
        (DashboardEvent::Page(home), DashboardEvent::Page(about)) => {
            assert_eq!(home.title, "Home");
            assert_eq!(home.depth, 0);
            assert_eq!(about.title, "About");
            assert_eq!(about.depth, 1);
        }
        other => panic!("expected two page events, got {:?}", other),
    }

    match &events[2] {
        DashboardEvent::Complete(payload) => {
            assert_eq!(payload.pages, 2);
            assert!(payload.reports.csv.exists());
            assert!(payload.reports.json.exists());
            assert!(payload.reports.markdown.exists());
        }
        other => panic!("expected complete event, got {:?}", other),
    }
    assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
}

#[tokio::test]
async fn test_relay_reports_unwritable_output_as_error() {
    let site = mock_site().await;
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let config = Config {
        crawler: CrawlConfig::new(site.uri()),
        output: OutputConfig {
            output_dir: blocker.join("reports"),
            report_name: "relay".to_string(),
        },
    };

    let mut rx = spawn_crawl(config);
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], DashboardEvent::Page(_)));
    assert!(matches!(events[1], DashboardEvent::Page(_)));
    assert!(matches!(events[2], DashboardEvent::Error(_)));
}

#[tokio::test]
async fn test_crawl_endpoint_streams_events() {
    let site = mock_site().await;
    let dir = TempDir::new().unwrap();
    let addr = start_dashboard(dir.path()).await;

    let output_dir = dir.path().join("outputs");
    let response = reqwest::Client::new()
        .get(format!("http://{}/crawl", addr))
        .query(&[
            ("url", site.uri()),
            ("max_pages", "5".to_string()),
            ("output_dir", output_dir.display().to_string()),
            ("report_name", "live".to_string()),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/event-stream"));

    let body = response.text().await.unwrap();
    assert!(body.contains(r#""title":"Home""#));
    assert!(body.contains(r#""title":"About""#));
    assert!(body.contains("event: complete"));
    assert!(!body.contains("event: error"));
    assert!(output_dir.join("live.md").exists());
}

#[tokio::test]
async fn test_crawl_endpoint_requires_url() {
    let dir = TempDir::new().unwrap();
    let addr = start_dashboard(dir.path()).await;

    let response = reqwest::get(format!("http://{}/crawl?max_pages=3", addr))
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["error"], "Missing url");
}

#[tokio::test]
async fn test_index_and_report_routes() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("report.md"), "# Crawl Report\n").unwrap();
    let addr = start_dashboard(dir.path()).await;

    let index = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(index.status(), 200);
    assert!(index.text().await.unwrap().contains("EventSource"));

    let report = reqwest::get(format!("http://{}/reports?path=report.md", addr))
        .await
        .unwrap();
    assert_eq!(report.status(), 200);
    assert_eq!(report.text().await.unwrap(), "# Crawl Report\n");

    let escaped = reqwest::get(format!("http://{}/reports?path=../../etc/passwd", addr))
        .await
        .unwrap();
    assert_eq!(escaped.status(), 404);
}
