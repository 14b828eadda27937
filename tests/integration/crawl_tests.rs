//! End-to-end crawl tests against mock sites

use std::collections::HashSet;
use std::time::Duration;
use sumi_sift::config::Config;
use sumi_sift::crawler::{crawl_with_config, parse_keywords, Crawler};
use sumi_sift::state::{VisitKind, VisitStatus};
use sumi_sift::SiftError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!(
            "<html><head><title>Page</title></head><body>\n{}\n</body></html>",
            body
        ))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(body))
        .expect(expected_hits)
        .mount(server)
        .await;
}

fn crawler_with(config: &Config) -> Crawler {
    Crawler::new(config).expect("Failed to build crawler")
}

fn crawler() -> Crawler {
    crawler_with(&Config::default())
}

#[tokio::test]
async fn test_contact_page_scenario() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        r#"<p>Welcome to our site</p>
        <a href="/contact">Reach us</a>
        <a href="/about">About</a>
        <a href="https://other.example.org/contact">Partner</a>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/contact",
        r#"<p>Contact us at support@x.com</p>
        <a href="/">Home</a>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/about",
        r#"<p>We sell widgets.</p>
        <a href="/">Back to start</a>
        <a href="/contact#form">Form</a>"#,
        1,
    )
    .await;

    let keywords = parse_keywords("contact, email");
    let report = crawler()
        .crawl(&base_url, &keywords, 30)
        .await
        .expect("Crawl failed");

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].url, format!("{}/contact", base_url));
    assert_eq!(report.results[0].content, "Contact us at support@x.com");

    assert_eq!(report.visited_count(), 3);
    assert_eq!(report.skipped_count(), 0);

    let unique: HashSet<&str> = report.visits.iter().map(|v| v.url.as_str()).collect();
    assert_eq!(unique.len(), report.visits.len(), "a URL was visited twice");
}

#[tokio::test]
async fn test_breadth_first_order() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/", r#"<a href="/a">a</a><a href="/b">b</a>"#, 1).await;
    mount_page(&server, "/a", r#"<a href="/a1">a1</a>"#, 1).await;
    mount_page(&server, "/b", r#"<a href="/b1">b1</a>"#, 1).await;
    mount_page(&server, "/a1", "leaf a1", 1).await;
    mount_page(&server, "/b1", "leaf b1", 1).await;

    let report = crawler().crawl(&base_url, &["leaf"], 30).await.unwrap();

    let order: Vec<String> = report
        .visits
        .iter()
        .map(|v| v.url.trim_start_matches(&base_url).to_string())
        .collect();
    assert_eq!(order, vec!["/", "/a", "/b", "/a1", "/b1"]);

    let result_urls: Vec<&str> = report.results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        result_urls,
        vec![format!("{}/a1", base_url), format!("{}/b1", base_url)]
    );
}

#[tokio::test]
async fn test_page_bound_is_exact() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    let links: String = (1..=10)
        .map(|i| format!(r#"<a href="/p{}">p{}</a>"#, i, i))
        .collect();
    mount_page(&server, "/", &format!("email here {}", links), 1).await;
    for i in 1..=10 {
        let hits = if i <= 2 { 1 } else { 0 };
        mount_page(&server, &format!("/p{}", i), "email on every page", hits).await;
    }

    let report = crawler().crawl(&base_url, &["email"], 3).await.unwrap();

    assert_eq!(report.visited_count(), 3);
    assert_eq!(report.results.len(), 3);
}

#[tokio::test]
async fn test_duplicate_links_fetched_once() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        &format!(
            r#"<a href="/x">1</a><a href="/x">2</a><a href="x">3</a>
            <a href="{}/x">4</a><a href="/x#top">5</a><a href="/">self</a>"#,
            base_url
        ),
        1,
    )
    .await;
    mount_page(&server, "/x", r#"<a href="/">home</a><a href="/x">self</a>"#, 1).await;

    let report = crawler().crawl(&base_url, &["anything"], 30).await.unwrap();

    assert_eq!(report.visited_count(), 2);
}

#[tokio::test]
async fn test_empty_keywords_match_nothing() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/", r#"Contact us at support@x.com <a href="/more">more</a>"#, 1).await;
    mount_page(&server, "/more", "email everywhere", 1).await;

    let keywords: Vec<String> = parse_keywords("");
    let report = crawler().crawl(&base_url, &keywords, 30).await.unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.visited_count(), 2);
    assert_eq!(report.no_match_count(), 2);
}

#[tokio::test]
async fn test_script_and_style_text_not_matched() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        r#"<style>.contact { color: red; }</style>
        <script>var email = "hidden@x.com";</script>
        <p>Nothing to see</p>"#,
        1,
    )
    .await;

    let report = crawler()
        .crawl(&base_url, &["contact", "email"], 30)
        .await
        .unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.no_match_count(), 1);
}

#[tokio::test]
async fn test_user_agent_header_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(html("email me"))
        .expect(1)
        .mount(&server)
        .await;

    let report = crawler().crawl(&server.uri(), &["email"], 30).await.unwrap();

    assert_eq!(report.results.len(), 1);
}

#[tokio::test]
async fn test_unreachable_page_is_skipped() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    // Same host, closed port: internal by host, but nothing listens there
    mount_page(
        &server,
        "/",
        r#"<p>email home</p><a href="http://127.0.0.1:1/down">down</a><a href="/ok">ok</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/ok", "<p>email ok</p>", 1).await;

    let report = crawler().crawl(&base_url, &["email"], 30).await.unwrap();

    assert_eq!(report.visited_count(), 3);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.results.len(), 2);

    let skipped = report
        .visits
        .iter()
        .find(|v| v.status.kind() == VisitKind::Skipped)
        .unwrap();
    assert_eq!(skipped.url, "http://127.0.0.1:1/down");
    assert_eq!(skipped.http_status, None);
}

#[tokio::test]
async fn test_oversized_body_is_skipped() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/", r#"<p>email</p><a href="/big">big</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<p>email {}</p>", "x".repeat(8 * 1024)))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.crawler.max_response_bytes = 4 * 1024;

    let report = crawler_with(&config)
        .crawl(&base_url, &["email"], 30)
        .await
        .unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.skipped_count(), 1);
    match &report.visits[1].status {
        VisitStatus::Skipped { error } => assert!(error.contains("exceeds"), "{}", error),
        other => panic!("expected skipped visit, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("email").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.crawler.request_timeout_secs = 1;

    let report = crawler_with(&config)
        .crawl(&server.uri(), &["email"], 30)
        .await
        .unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.skipped_count(), 1);
}

#[tokio::test]
async fn test_error_status_page_is_still_extracted() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/", r#"<a href="/gone">gone</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string("<p>Page not found - email the webmaster</p>")
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let report = crawler().crawl(&base_url, &["email"], 30).await.unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.visits[1].http_status, Some(404));
}

#[tokio::test]
async fn test_results_stay_on_seed_host() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        r#"<p>email</p>
        <a href="http://localhost/elsewhere">other host</a>
        <a href="//cdn.example.com/x">scheme relative</a>
        <a href="mailto:someone@example.com">mail</a>"#,
        1,
    )
    .await;

    let report = crawler().crawl(&base_url, &["email"], 30).await.unwrap();

    assert_eq!(report.visited_count(), 1);
    for result in &report.results {
        assert!(result.url.starts_with("http://127.0.0.1"));
    }
}

#[tokio::test]
async fn test_invalid_arguments_fail_the_call() {
    let result = crawler().crawl("", &["email"], 30).await;
    assert!(matches!(result, Err(SiftError::EmptySeedUrl)));

    let result = crawler().crawl("example.com", &[" "], 30).await;
    assert!(matches!(result, Err(SiftError::InvalidKeyword { index: 0 })));

    let result = crawler().crawl("example.com", &["email"], 0).await;
    assert!(matches!(result, Err(SiftError::InvalidMaxPages(0))));
}

#[tokio::test]
async fn test_configured_page_bound() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/", r#"<p>email</p><a href="/next">next</a>"#, 1).await;
    mount_page(&server, "/next", "<p>email</p>", 0).await;

    let mut config = Config::default();
    config.crawler.max_pages = 1;

    let report = crawl_with_config(&config, &base_url, &["email"])
        .await
        .unwrap();

    assert_eq!(report.visited_count(), 1);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.seed_url, format!("{}/", base_url));
}
