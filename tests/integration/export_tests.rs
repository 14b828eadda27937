//! Crawl, store, and export round trips

use sumi_sift::crawler::{parse_keywords, Crawler};
use sumi_sift::output::{parse_csv, write_export, ExportFormat};
use sumi_sift::storage::{open_storage, ResultStore};
use sumi_sift::Config;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <p>Send an email, "quoted", to us</p>
            <p>Unrelated line</p>
            <a href="/contact">next</a>
            </body></html>"#,
        ))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body>\n<h1>Contact</h1>\n<p>Phone: 555-0100</p>\n<p>Contact form below</p>\n</body></html>",
        ))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawl_store_and_csv_export() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let keywords = parse_keywords("Contact,EMAIL");
    let report = Crawler::new(&Config::default())
        .unwrap()
        .crawl(&server.uri(), &keywords, 30)
        .await
        .unwrap();
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[1].content, "Contact\nContact form below");

    let dir = tempdir().unwrap();
    let mut storage = open_storage(&dir.path().join("runs.db")).unwrap();
    let run_id = storage.save_report(&report).unwrap();

    let run = storage.get_run(run_id).unwrap();
    assert_eq!(run.visited_count, 2);
    assert_eq!(run.result_count, 2);

    let loaded = storage.load_results(run_id).unwrap();
    assert_eq!(loaded, report.results);

    let export_path = dir.path().join("scraped_data.csv");
    write_export(&loaded, ExportFormat::Csv, &export_path).unwrap();

    let written = std::fs::read_to_string(&export_path).unwrap();
    assert!(written.starts_with("URL,Matched Content"));
    assert_eq!(parse_csv(&written).unwrap(), report.results);
}

#[tokio::test]
async fn test_text_export_lists_each_page() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let report = Crawler::new(&Config::default())
        .unwrap()
        .crawl(&server.uri(), &["phone"], 30)
        .await
        .unwrap();

    let dir = tempdir().unwrap();
    let export_path = dir.path().join("scraped_data.txt");
    write_export(&report.results, ExportFormat::Text, &export_path).unwrap();

    let written = std::fs::read_to_string(&export_path).unwrap();
    assert!(written.contains(&format!("{}/contact", server.uri())));
    assert!(written.contains("Phone: 555-0100"));
    assert!(!written.contains("Unrelated line"));
}

#[tokio::test]
async fn test_stored_runs_are_isolated() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let crawler = Crawler::new(&Config::default()).unwrap();
    let first = crawler.crawl(&server.uri(), &["email"], 30).await.unwrap();
    let second = crawler.crawl(&server.uri(), &["phone"], 30).await.unwrap();

    let dir = tempdir().unwrap();
    let mut storage = open_storage(&dir.path().join("runs.db")).unwrap();
    let first_id = storage.save_report(&first).unwrap();
    let second_id = storage.save_report(&second).unwrap();

    assert_ne!(first_id, second_id);
    assert_eq!(storage.list_runs().unwrap().len(), 2);
    assert_eq!(storage.load_results(first_id).unwrap(), first.results);
    assert_eq!(storage.load_results(second_id).unwrap(), second.results);

    storage.delete_run(first_id).unwrap();
    assert!(storage.get_run(first_id).is_err());
    assert_eq!(storage.load_report(second_id).unwrap(), second);
}
