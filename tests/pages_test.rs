// Loader contract tests: query coercion, degrade-on-failure, facets

mod common;

use std::sync::Arc;

use cleoview::pages::{self, PageQuery};

use common::{client_with, executions_body, result_item, StubFetch};

#[tokio::test]
async fn executions_loader_passes_envelope_through() {
    let fetch = Arc::new(StubFetch::new());
    fetch.push_response(200, "OK", &executions_body(120, 50, 0, &["smoke", "regression"]));
    let client = client_with(fetch.clone());

    let page = pages::executions::load(&client, &PageQuery::default()).await;

    assert!(page.error.is_none());
    assert_eq!(page.executions.len(), 2);
    assert!(page.executions.len() as i64 <= page.limit);
    assert_eq!(page.total, 120);
    assert_eq!(page.limit, 50);
    assert_eq!(page.offset, 0);
    // has_next mirrors the backend: offset + items.len() < total
    assert!(page.has_next);
    assert_eq!(page.executions[0].name, "smoke");
}

#[tokio::test]
async fn missing_or_garbage_query_params_request_the_defaults() {
    let fetch = Arc::new(StubFetch::new());
    fetch.push_response(200, "OK", &executions_body(0, 50, 0, &[]));
    fetch.push_response(200, "OK", &executions_body(0, 50, 0, &[]));
    let client = client_with(fetch.clone());

    pages::executions::load(&client, &PageQuery::default()).await;
    pages::executions::load(
        &client,
        &PageQuery::new(Some("fifty".into()), Some("x".into())),
    )
    .await;

    let urls = fetch.recorded_urls();
    assert_eq!(urls.len(), 2);
    for url in urls {
        assert_eq!(url, "http://cleopatra.test/api/executions?limit=50&offset=0");
    }
}

#[tokio::test]
async fn explicit_query_params_reach_the_backend() {
    let fetch = Arc::new(StubFetch::new());
    fetch.push_response(200, "OK", &executions_body(120, 20, 100, &["tail"]));
    let client = client_with(fetch.clone());

    let page = pages::executions::load(
        &client,
        &PageQuery::new(Some("20".into()), Some("100".into())),
    )
    .await;

    assert_eq!(
        fetch.recorded_urls(),
        vec!["http://cleopatra.test/api/executions?limit=20&offset=100".to_string()]
    );
    assert_eq!(page.offset, 100);
}

#[tokio::test]
async fn executions_loader_degrades_on_http_500() {
    let fetch = Arc::new(StubFetch::new());
    fetch.push_response(500, "Internal Server Error", "boom");
    let client = client_with(fetch);

    let page = pages::executions::load(&client, &PageQuery::default()).await;

    assert!(page.executions.is_empty());
    assert_eq!(page.total, 0);
    assert!(!page.has_next);
    assert_eq!(page.limit, 50);
    assert_eq!(page.offset, 0);
    let err = page.error.expect("error message expected");
    assert!(!err.is_empty());
    assert!(err.contains("500"));
}

#[tokio::test]
async fn executions_loader_degrades_on_transport_failure() {
    let fetch = Arc::new(StubFetch::new());
    fetch.push_transport_failure("connection refused");
    let client = client_with(fetch);

    let page = pages::executions::load(&client, &PageQuery::default()).await;

    assert!(page.executions.is_empty());
    assert!(page.error.unwrap().contains("connection refused"));
}

#[tokio::test]
async fn results_loader_derives_page_scoped_facets_in_first_seen_order() {
    let body = serde_json::json!({
        "execution_id": 7,
        "summary": { "total": 3, "pass": 2, "fail": 1, "ignor": 0 },
        "total": 3,
        "limit": 50,
        "offset": 0,
        "has_next": false,
        "items": [
            result_item(1, "win", "P"),
            result_item(2, "mac", "F"),
            result_item(3, "win", "P")
        ]
    })
    .to_string();

    let fetch = Arc::new(StubFetch::new());
    fetch.push_response(200, "OK", &body);
    let client = client_with(fetch.clone());

    let page = pages::results::load(&client, "7", &PageQuery::default()).await;

    assert!(page.error.is_none());
    assert_eq!(page.execution_id, 7);
    assert_eq!(page.available_platforms, vec!["win".to_string(), "mac".to_string()]);
    assert_eq!(page.available_statuses, vec!["P".to_string(), "F".to_string()]);
    assert_eq!(page.summary.pass, 2);
    assert_eq!(page.summary.fail, 1);
    assert_eq!(
        fetch.recorded_urls(),
        vec![
            "http://cleopatra.test/api/execution/7/result?limit=50&offset=0&include_summary=true"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn results_loader_degrades_on_http_500() {
    let fetch = Arc::new(StubFetch::new());
    fetch.push_response(500, "Internal Server Error", "");
    let client = client_with(fetch);

    let page = pages::results::load(&client, "7", &PageQuery::default()).await;

    assert!(page.results.is_empty());
    assert_eq!(page.total, 0);
    assert!(!page.has_next);
    assert_eq!(page.summary.total, 0);
    assert!(page.available_platforms.is_empty());
    assert!(page.available_statuses.is_empty());
    assert_eq!(page.execution_id, 7);
    assert!(page.error.is_some());
}

#[tokio::test]
async fn results_loader_rejects_non_numeric_id_without_calling_backend() {
    let fetch = Arc::new(StubFetch::new());
    let client = client_with(fetch.clone());

    let page = pages::results::load(&client, "latest", &PageQuery::default()).await;

    assert!(fetch.recorded_urls().is_empty());
    assert!(page.results.is_empty());
    assert!(page.error.unwrap().contains("latest"));
}

#[tokio::test]
async fn results_loader_tolerates_missing_summary() {
    let body = serde_json::json!({
        "execution_id": 7,
        "total": 1,
        "limit": 50,
        "offset": 0,
        "has_next": false,
        "items": [result_item(1, "linux", "F")]
    })
    .to_string();

    let fetch = Arc::new(StubFetch::new());
    fetch.push_response(200, "OK", &body);
    let client = client_with(fetch);

    let page = pages::results::load(&client, "7", &PageQuery::default()).await;

    assert!(page.error.is_none());
    assert_eq!(page.summary.total, 0);
    assert_eq!(page.results.len(), 1);
}
