use std::time::Duration;

use pretty_assertions::assert_eq;
use story_core::{Endpoint, Record};
use story_engine::{FailureKind, FetchSettings, ReqwestFetcher, SearchFetcher};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HITS: &str = r#"{
  "hits": [
    {"objectID":"0","title":"React","url":"https://reactjs.org/","author":"Jordan Walke","num_comments":3,"points":4},
    {"objectID":"1","title":"Redux","url":"https://redux.js.org/","author":"Dan Abramov, Andrew Clark","num_comments":2,"points":5}
  ],
  "nbHits": 2
}"#;

fn endpoint(server: &MockServer, route: &str, query: &str) -> Endpoint {
    Endpoint::for_query(&format!("{}{route}?query=", server.uri()), query)
}

#[tokio::test]
async fn fetcher_returns_hits_in_response_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "React"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(HITS, "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let hits = fetcher
        .fetch(&endpoint(&server, "/search", "React"))
        .await
        .expect("fetch ok");

    assert_eq!(
        hits,
        vec![
            Record {
                object_id: "0".to_string(),
                title: "React".to_string(),
                url: "https://reactjs.org/".to_string(),
                author: "Jordan Walke".to_string(),
                num_comments: 3,
                points: 4,
            },
            Record {
                object_id: "1".to_string(),
                title: "Redux".to_string(),
                url: "https://redux.js.org/".to_string(),
                author: "Dan Abramov, Andrew Clark".to_string(),
                num_comments: 2,
                points: 5,
            },
        ]
    );
}

#[tokio::test]
async fn query_is_sent_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "rust & go"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"hits":[]}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::default();
    let hits = fetcher
        .fetch(&endpoint(&server, "/search", "rust & go"))
        .await
        .expect("fetch ok");
    assert!(hits.is_empty());
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch(&endpoint(&server, "/missing", "React"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_rejects_unexpected_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":{"stories":[]}}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch(&endpoint(&server, "/search", "React"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UnexpectedShape);
}

#[tokio::test]
async fn fetcher_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch(&endpoint(&server, "/search", "React"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UnexpectedShape);
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(r#"{"hits":[]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher
        .fetch(&endpoint(&server, "/slow", "React"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(HITS, "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher
        .fetch(&endpoint(&server, "/large", "React"))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(HITS.len() as u64)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let fetcher = ReqwestFetcher::default();
    let err = fetcher
        .fetch(&Endpoint::for_query("not a url?query=", "React"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
