//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, including report files.

use seedcrawl::config::{CrawlConfig, OutputConfig};
use seedcrawl::crawler::{crawl, Crawler};
use seedcrawl::output::ReportBuilder;
use seedcrawl::PageRecord;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Home links to two local pages and one page on `external`
async fn mount_site(server: &MockServer, external: &str) {
    mount_page(
        server,
        "/",
        200,
        format!(
            r#"<html><head><title>Home</title></head><body>
            <p>Welcome to the crawler playground</p>
            <a href="/page1">Page 1</a>
            <a href="page2">Page 2</a>
            <a href="{}/elsewhere">Elsewhere</a>
            <img src="/logo.png">
            </body></html>"#,
            external
        ),
    )
    .await;

    mount_page(
        server,
        "/page1",
        200,
        r#"<html><head><title>Page 1</title></head><body>
        Content one <a href="/deep">Deep</a> <a href="/">Home</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        server,
        "/page2",
        200,
        r#"<html><head><title>Page 2</title></head><body>Content two</body></html>"#.to_string(),
    )
    .await;

    mount_page(
        server,
        "/deep",
        200,
        r#"<html><head><title>Deep</title></head><body>Deep content</body></html>"#.to_string(),
    )
    .await;
}

async fn mount_external(server: &MockServer) {
    mount_page(
        server,
        "/elsewhere",
        200,
        r#"<html><head><title>Elsewhere</title></head><body>Outside</body></html>"#.to_string(),
    )
    .await;
}

fn urls(pages: &[PageRecord]) -> Vec<String> {
    pages.iter().map(|p| p.url.clone()).collect()
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let site = MockServer::start().await;
    let external = MockServer::start().await;
    mount_site(&site, &external.uri()).await;
    mount_external(&external).await;

    let base = site.uri();
    let mut config = CrawlConfig::new(base.clone());
    config.max_pages = 10;
    config.max_depth = 2;

    let mut seen = Vec::new();
    let pages = crawl(config, |page| seen.push(page.url.clone()))
        .await
        .expect("crawl should start");

    assert_eq!(
        urls(&pages),
        vec![
            format!("{}/", base),
            format!("{}/page1", base),
            format!("{}/page2", base),
            format!("{}/deep", base),
        ]
    );
    assert_eq!(seen, urls(&pages));

    let home = &pages[0];
    assert_eq!(home.status_code, 200);
    assert_eq!(home.title, "Home");
    assert_eq!(home.depth, 0);
    assert!(home.text_preview.contains("Welcome to the crawler playground"));
    assert_eq!(home.images, vec!["/logo.png".to_string()]);
    assert_eq!(home.links.len(), 3);

    assert_eq!(pages[1].depth, 1);
    assert_eq!(pages[2].depth, 1);
    assert_eq!(pages[3].depth, 2);

    let external_requests = external.received_requests().await.unwrap_or_default();
    assert!(external_requests.is_empty(), "external host must not be fetched");
}

#[tokio::test]
async fn test_crawl_follows_external_when_allowed() {
    let site = MockServer::start().await;
    let external = MockServer::start().await;
    mount_site(&site, &external.uri()).await;
    mount_external(&external).await;

    let mut config = CrawlConfig::new(site.uri());
    config.max_pages = 10;
    config.max_depth = 1;
    config.same_domain_only = false;

    let pages = crawl(config, |_| {}).await.unwrap();

    assert_eq!(
        urls(&pages),
        vec![
            format!("{}/", site.uri()),
            format!("{}/page1", site.uri()),
            format!("{}/page2", site.uri()),
            format!("{}/elsewhere", external.uri()),
        ]
    );
    let elsewhere = &pages[3];
    assert_eq!(elsewhere.title, "Elsewhere");
    assert_eq!(elsewhere.depth, 1);
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let site = MockServer::start().await;
    mount_site(&site, "http://other.invalid").await;

    let mut config = CrawlConfig::new(site.uri());
    config.max_depth = 1;
    config.max_pages = 10;

    let pages = crawl(config, |_| {}).await.unwrap();

    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| p.depth <= 1));
    assert!(!urls(&pages).iter().any(|u| u.ends_with("/deep")));
}

#[tokio::test]
async fn test_crawl_respects_page_budget() {
    let site = MockServer::start().await;
    mount_site(&site, "http://other.invalid").await;

    let mut config = CrawlConfig::new(site.uri());
    config.max_pages = 2;

    let pages = crawl(config, |_| {}).await.unwrap();
    assert_eq!(pages.len(), 2);

    let requests = site.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_non_success_pages_are_recorded_but_not_expanded() {
    let site = MockServer::start().await;
    mount_page(
        &site,
        "/",
        200,
        r#"<a href="/missing">Missing</a>"#.to_string(),
    )
    .await;
    mount_page(
        &site,
        "/missing",
        404,
        r#"<html><head><title>Not Found</title></head><body><a href="/hidden">x</a></body></html>"#
            .to_string(),
    )
    .await;
    mount_page(&site, "/hidden", 200, "<title>Hidden</title>".to_string()).await;

    let mut config = CrawlConfig::new(site.uri());
    config.max_depth = 3;

    let pages = crawl(config, |_| {}).await.unwrap();

    assert_eq!(pages.len(), 2);
    let missing = &pages[1];
    assert_eq!(missing.status_code, 404);
    assert_eq!(missing.title, "Not Found");
    assert_eq!(missing.links, vec!["/hidden".to_string()]);
}

#[tokio::test]
async fn test_unreachable_seed_yields_single_failure_record() {
    let config = CrawlConfig {
        timeout_secs: 2,
        ..CrawlConfig::new("http://127.0.0.1:1/")
    };

    let mut calls = 0;
    let pages = crawl(config, |_| calls += 1).await.unwrap();

    assert_eq!(calls, 1);
    assert_eq!(pages.len(), 1);
    let page = &pages[0];
    assert_eq!(page.url, "http://127.0.0.1:1/");
    assert_eq!(page.status_code, 0);
    assert!(page.title.is_empty());
    assert!(page.text_preview.is_empty());
    assert!(page.links.is_empty());
    assert!(page.images.is_empty());
    assert_eq!(page.depth, 0);
}

#[tokio::test]
async fn test_invalid_seed_fails_before_fetching() {
    let result = crawl(CrawlConfig::new("ftp://a.test/"), |_| {}).await;
    assert!(result.is_err());

    let result = Crawler::new(CrawlConfig::new("not a url"));
    assert!(result.is_err());
}

#[tokio::test]
async fn test_reports_written_after_crawl() {
    let site = MockServer::start().await;
    mount_site(&site, "http://other.invalid").await;
    let dir = TempDir::new().unwrap();

    let pages = crawl(CrawlConfig::new(site.uri()), |_| {}).await.unwrap();

    let output = OutputConfig {
        output_dir: dir.path().join("reports"),
        report_name: "site".to_string(),
    };
    let paths = ReportBuilder::from_config(&pages, &output).save().unwrap();

    let csv = std::fs::read_to_string(&paths.csv).unwrap();
    assert!(csv.starts_with("url,status_code,title,text_preview,links,images,fetched_at,depth"));
    assert_eq!(csv.lines().count(), pages.len() + 1);

    let json = std::fs::read_to_string(&paths.json).unwrap();
    let parsed: Vec<PageRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, pages);

    let markdown = std::fs::read_to_string(&paths.markdown).unwrap();
    assert!(markdown.starts_with("# Crawl Report"));
    assert!(markdown.contains(&format!("Total pages crawled: {}", pages.len())));
    assert!(markdown.contains("- 200: 4"));
    assert!(markdown.contains(&format!("### {}/", site.uri())));
}

#[tokio::test]
async fn test_failed_pages_show_in_status_histogram() {
    let dir = TempDir::new().unwrap();
    let config = CrawlConfig {
        timeout_secs: 2,
        ..CrawlConfig::new("http://127.0.0.1:1/")
    };
    let pages = crawl(config, |_| {}).await.unwrap();

    let output = OutputConfig {
        output_dir: dir.path().to_path_buf(),
        report_name: "failed".to_string(),
    };
    let paths = ReportBuilder::from_config(&pages, &output).save().unwrap();

    let markdown = std::fs::read_to_string(&paths.markdown).unwrap();
    assert!(markdown.contains("- 0: 1"));
}
