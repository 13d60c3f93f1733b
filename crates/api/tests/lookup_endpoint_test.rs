mod helpers;

use axum::http::StatusCode;
use helpers::{create_test_app, get, stored_rows, StubResolver};
use serde_json::Value;

#[tokio::test]
async fn test_lookup_deduplicates_addresses() {
    let app = create_test_app(
        StubResolver::default().with_answer("example.com", &["93.184.216.34", "93.184.216.34"]),
    )
    .await;

    let (status, body) = get(&app.router, "/v1/tools/lookup?domain=example.com").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let query_id = json["queryID"].as_u64().unwrap();
    assert_eq!(json["domain"], "example.com");
    assert_eq!(json["client_ip"], "203.0.113.7");
    assert!(json["created_time"].as_i64().unwrap() > 0);

    let addresses = json["addresses"].as_array().unwrap();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0]["ip"], "93.184.216.34");
    assert_eq!(addresses[0]["queryID"].as_u64().unwrap(), query_id);

    assert_eq!(stored_rows(&app.pool).await, 1);
}

#[tokio::test]
async fn test_lookup_keeps_resolver_order() {
    let app = create_test_app(StubResolver::default().with_answer(
        "multi.example.org",
        &["10.0.0.3", "10.0.0.1", "10.0.0.3", "10.0.0.2"],
    ))
    .await;

    let (status, body) = get(&app.router, "/v1/tools/lookup?domain=multi.example.org").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let ips: Vec<&str> = json["addresses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["ip"].as_str().unwrap())
        .collect();
    assert_eq!(ips, vec!["10.0.0.3", "10.0.0.1", "10.0.0.2"]);
}

#[tokio::test]
async fn test_lookup_invalid_domain_returns_400() {
    let app = create_test_app(StubResolver::default()).await;

    for uri in [
        "/v1/tools/lookup?domain=localhost",
        "/v1/tools/lookup?domain=-bad.example.com",
        "/v1/tools/lookup?domain=",
        "/v1/tools/lookup",
    ] {
        let (status, body) = get(&app.router, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["message"], "Domain parameter is Not Valid or Provided");
    }

    assert!(app.resolver.calls().is_empty());
    assert_eq!(stored_rows(&app.pool).await, 0);
    assert_eq!(app.metrics.endpoint_calls("/v1/tools/lookup"), 4);
}

#[tokio::test]
async fn test_lookup_repeated_domain_uses_first_value() {
    let app = create_test_app(
        StubResolver::default()
            .with_answer("example.com", &["93.184.216.34"])
            .with_answer("example.org", &["93.184.216.35"]),
    )
    .await;

    let (status, body) = get(
        &app.router,
        "/v1/tools/lookup?domain=example.com&domain=example.org",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["domain"], "example.com");
    assert_eq!(app.resolver.calls(), vec!["example.com".to_string()]);
    assert_eq!(app.metrics.duration_count(), 1);
}

#[tokio::test]
async fn test_lookup_repeated_invalid_domain_returns_json_400() {
    let app = create_test_app(StubResolver::default()).await;

    let (status, body) = get(&app.router, "/v1/tools/lookup?domain=bad&domain=example.com").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "Domain parameter is Not Valid or Provided");
    assert!(app.resolver.calls().is_empty());
    assert_eq!(app.metrics.duration_count(), 1);
}

#[tokio::test]
async fn test_lookup_unknown_host_returns_404() {
    let app = create_test_app(StubResolver::default()).await;

    let (status, body) = get(&app.router, "/v1/tools/lookup?domain=nothing.invalid").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "The Host IP Not Found");
    assert_eq!(app.resolver.calls(), vec!["nothing.invalid".to_string()]);
    assert_eq!(stored_rows(&app.pool).await, 0);
    assert_eq!(app.metrics.lookup_count("nothing.invalid"), 0);
}

#[tokio::test]
async fn test_lookup_storage_failure_returns_500() {
    let app =
        create_test_app(StubResolver::default().with_answer("example.com", &["93.184.216.34"]))
            .await;
    app.pool.close().await;

    let (status, body) = get(&app.router, "/v1/tools/lookup?domain=example.com").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "Internal error");
    assert_eq!(app.metrics.lookup_count("example.com"), 0);
}

#[tokio::test]
async fn test_lookup_records_metrics() {
    let app =
        create_test_app(StubResolver::default().with_answer("example.com", &["93.184.216.34"]))
            .await;

    get(&app.router, "/v1/tools/lookup?domain=example.com").await;
    get(&app.router, "/v1/tools/lookup?domain=example.com").await;
    get(&app.router, "/v1/tools/lookup?domain=bad").await;

    assert_eq!(app.metrics.endpoint_calls("/v1/tools/lookup"), 3);
    assert_eq!(app.metrics.lookup_count("example.com"), 2);
    assert_eq!(app.metrics.duration_count(), 3);
}
