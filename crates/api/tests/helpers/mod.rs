#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    Router,
};
use hostprobe_api::{create_api_routes, AppState, RuntimeInfo};
use hostprobe_application::ports::HostResolver;
use hostprobe_application::services::{HostLookupService, QueryIdGenerator};
use hostprobe_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase, ValidateIpUseCase};
use hostprobe_domain::DomainError;
use hostprobe_infrastructure::database::run_migrations;
use hostprobe_infrastructure::metrics::LookupMetrics;
use hostprobe_infrastructure::repositories::SqliteLookupRecordRepository;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_VERSION: &str = "9.9.9-test";

/// Resolver answering from a fixed table; unknown names are not found.
#[derive(Default)]
pub struct StubResolver {
    answers: Mutex<HashMap<String, Vec<Ipv4Addr>>>,
    calls: Mutex<Vec<String>>,
}

impl StubResolver {
    pub fn with_answer(self, domain: &str, addresses: &[&str]) -> Self {
        self.answers.lock().unwrap().insert(
            domain.to_string(),
            addresses.iter().map(|a| a.parse().unwrap()).collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        self.calls.lock().unwrap().push(domain.to_string());
        self.answers
            .lock()
            .unwrap()
            .get(domain)
            .cloned()
            .ok_or_else(|| DomainError::HostNotFound(domain.to_string()))
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub resolver: Arc<StubResolver>,
    pub metrics: Arc<LookupMetrics>,
}

pub async fn create_test_app(resolver: StubResolver) -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();

    let resolver = Arc::new(resolver);
    let metrics = Arc::new(LookupMetrics::new());
    let repository = Arc::new(SqliteLookupRecordRepository::new(pool.clone()));

    let state = AppState {
        lookup_domain: Arc::new(LookupDomainUseCase::new(
            Arc::new(HostLookupService::new(resolver.clone())),
            repository.clone(),
            metrics.clone(),
            Arc::new(QueryIdGenerator::new()),
        )),
        get_history: Arc::new(GetHistoryUseCase::new(repository, 20)),
        validate_ip: Arc::new(ValidateIpUseCase::new()),
        metrics: metrics.clone(),
        metrics_exporter: metrics.clone(),
        runtime: RuntimeInfo {
            version: TEST_VERSION.to_string(),
            kubernetes: false,
        },
    };

    TestApp {
        router: create_api_routes(state),
        pool,
        resolver,
        metrics,
    }
}

pub fn client_addr() -> SocketAddr {
    "203.0.113.7:51234".parse().unwrap()
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let mut request = Request::builder()
        .uri(uri)
        .header("user-agent", "hostprobe-tests/1.0")
        .body(Body::empty())
        .unwrap();
    request.extensions_mut().insert(ConnectInfo(client_addr()));
    send(router, request).await
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn stored_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM lookup_records")
        .fetch_one(pool)
        .await
        .unwrap()
}
