#![allow(dead_code)]

use async_trait::async_trait;
use hostprobe_application::ports::{HostResolver, LookupRecordRepository, MetricsSink};
use hostprobe_domain::{DomainError, LookupRecord};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock HostResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHostResolver {
    responses: Arc<RwLock<HashMap<String, Vec<Ipv4Addr>>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, addresses: &[&str]) {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.responses
            .write()
            .await
            .insert(domain.to_string(), parsed);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.should_fail.read().await {
            return Err(DomainError::HostNotFound(domain.to_string()));
        }

        self.responses
            .read()
            .await
            .get(domain)
            .cloned()
            .ok_or_else(|| DomainError::HostNotFound(domain.to_string()))
    }
}

// ============================================================================
// Mock LookupRecordRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockLookupRecordRepository {
    records: Arc<RwLock<Vec<LookupRecord>>>,
    should_fail: Arc<RwLock<bool>>,
    last_limit: Arc<Mutex<Option<u32>>>,
}

impl MockLookupRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn all(&self) -> Vec<LookupRecord> {
        self.records.read().await.clone()
    }

    pub fn last_limit(&self) -> Option<u32> {
        *self.last_limit.lock().unwrap()
    }
}

#[async_trait]
impl LookupRecordRepository for MockLookupRecordRepository {
    async fn append(&self, record: &LookupRecord) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock storage offline".to_string()));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<LookupRecord>, DomainError> {
        *self.last_limit.lock().unwrap() = Some(limit);

        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock storage offline".to_string()));
        }

        let records = self.records.read().await;
        let mut indexed: Vec<(usize, &LookupRecord)> = records.iter().enumerate().collect();
        indexed.sort_by(|a, b| b.1.created_time.cmp(&a.1.created_time).then(b.0.cmp(&a.0)));
        Ok(indexed
            .into_iter()
            .take(limit as usize)
            .map(|(_, r)| r.clone())
            .collect())
    }
}

// ============================================================================
// Mock MetricsSink
// ============================================================================

#[derive(Default)]
pub struct MockMetricsSink {
    endpoint_calls: Mutex<Vec<String>>,
    lookups: Mutex<Vec<String>>,
    durations: Mutex<Vec<f64>>,
}

impl MockMetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint_calls(&self) -> Vec<String> {
        self.endpoint_calls.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn durations(&self) -> Vec<f64> {
        self.durations.lock().unwrap().clone()
    }
}

impl MetricsSink for MockMetricsSink {
    fn increment_endpoint_call(&self, endpoint: &str) {
        self.endpoint_calls.lock().unwrap().push(endpoint.to_string());
    }

    fn increment_lookup(&self, domain: &str) {
        self.lookups.lock().unwrap().push(domain.to_string());
    }

    fn observe_lookup_duration(&self, seconds: f64) {
        self.durations.lock().unwrap().push(seconds);
    }
}
