use std::time::Duration;

use leadgen_api::types::PageContent;
use leadgen_api::{Client, PageFetcher, SuggestQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn host_of(server: &MockServer) -> String {
    server.uri().trim_start_matches("http://").to_string()
}

#[tokio::test]
async fn suggest_success_drops_empty_domains() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("suggestions.json");

    Mock::given(method("GET"))
        .and(path("/v1/companies/suggest"))
        .and(query_param("query", "Segment"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.suggest(&SuggestQuery::new(" Segment ")).await;
    assert!(result.is_ok());

    let companies = result.unwrap();
    assert_eq!(companies.len(), 3);
    assert_eq!(companies[0].domain, "segment.com");
    assert!(companies.iter().all(|c| !c.domain.is_empty()));
    assert!(companies.iter().all(|c| c.name != "Ghost"));
}

#[tokio::test]
async fn suggest_null_domain_drops_only_that_entry() {
    let mock_server = MockServer::start().await;
    let body = r#"[{"name":"Ghost","domain":null,"logo":null},{"name":"Segment","domain":"segment.com","logo":null}]"#;

    Mock::given(method("GET"))
        .and(path("/v1/companies/suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let companies = client.suggest(&SuggestQuery::new("segment")).await.unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Segment");
    assert_eq!(companies[0].domain, "segment.com");
}

#[tokio::test]
async fn suggest_truncates_to_limit() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("suggestions.json");

    Mock::given(method("GET"))
        .and(path("/v1/companies/suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let companies = client
        .suggest(&SuggestQuery::new("Segment").with_limit(2))
        .await
        .unwrap();
    assert_eq!(companies.len(), 2);
    assert_eq!(companies[1].name, "Segment Data");
}

#[tokio::test]
async fn suggest_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/companies/suggest"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.suggest(&SuggestQuery::new("crm")).await;
    match result {
        Err(leadgen_api::Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        _ => panic!("expected HttpStatus error"),
    }
}

#[tokio::test]
async fn suggest_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/companies/suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.suggest(&SuggestQuery::new("crm")).await;
    assert!(matches!(result, Err(leadgen_api::Error::RequestFailed)));
}

#[tokio::test]
async fn fetch_page_returns_html() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><p>We build tools for teams.</p></html>"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(Duration::from_secs(5)).with_scheme("http");
    let page = fetcher.fetch_page(&host_of(&mock_server)).await;
    assert_eq!(
        page.html(),
        Some("<html><p>We build tools for teams.</p></html>")
    );
}

#[tokio::test]
async fn fetch_page_non_success_still_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<p>Not here</p>"))
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(Duration::from_secs(5)).with_scheme("http");
    let page = fetcher.fetch_page(&host_of(&mock_server)).await;
    assert_eq!(page, PageContent::Html("<p>Not here</p>".to_string()));
}

#[tokio::test]
async fn fetch_page_timeout_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>too late</p>")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(Duration::from_millis(50)).with_scheme("http");
    let page = fetcher.fetch_page(&host_of(&mock_server)).await;
    assert!(page.is_unreachable());
}

#[tokio::test]
async fn fetch_page_connection_refused_is_unreachable() {
    let fetcher = PageFetcher::new(Duration::from_secs(1)).with_scheme("http");
    let page = fetcher.fetch_page("127.0.0.1:9").await;
    assert!(page.is_unreachable());
}
