use dashmap::DashMap;
use hostprobe_application::ports::{MetricsExporter, MetricsSink};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::prometheus;

/// Process-wide metrics registry.
///
/// Counters are atomics, per-key counts live in `DashMap`s. Recording never
/// fails and never waits on I/O.
#[derive(Clone)]
pub struct LookupMetrics {
    /// Inbound requests per endpoint
    endpoint_calls: Arc<DashMap<Arc<str>, u64>>,

    /// Successful lookups per domain
    lookups: Arc<DashMap<Arc<str>, u64>>,

    /// Lookup pipeline executions observed
    duration_count: Arc<AtomicU64>,

    /// Total lookup pipeline time in microseconds
    duration_sum_us: Arc<AtomicU64>,
}

/// Point-in-time copy of the registry, keys sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub endpoint_calls: Vec<(String, u64)>,
    pub lookups: Vec<(String, u64)>,
    pub duration_count: u64,
    pub duration_sum_seconds: f64,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self {
            endpoint_calls: Arc::new(DashMap::new()),
            lookups: Arc::new(DashMap::new()),
            duration_count: Arc::new(AtomicU64::new(0)),
            duration_sum_us: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn endpoint_calls(&self, endpoint: &str) -> u64 {
        self.endpoint_calls.get(endpoint).map(|v| *v).unwrap_or(0)
    }

    pub fn lookup_count(&self, domain: &str) -> u64 {
        self.lookups.get(domain).map(|v| *v).unwrap_or(0)
    }

    pub fn duration_count(&self) -> u64 {
        self.duration_count.load(Ordering::Relaxed)
    }

    pub fn duration_sum_seconds(&self) -> f64 {
        self.duration_sum_us.load(Ordering::Relaxed) as f64 / 1_000_000.0
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            endpoint_calls: sorted_counts(&self.endpoint_calls),
            lookups: sorted_counts(&self.lookups),
            duration_count: self.duration_count(),
            duration_sum_seconds: self.duration_sum_seconds(),
        }
    }

    fn bump(map: &DashMap<Arc<str>, u64>, key: &str) {
        if let Some(mut count) = map.get_mut(key) {
            *count += 1;
            return;
        }
        map.entry(Arc::from(key))
            .and_modify(|c| *c += 1)
            .or_insert(1);
    }
}

fn sorted_counts(map: &DashMap<Arc<str>, u64>) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = map
        .iter()
        .map(|entry| (entry.key().to_string(), *entry.value()))
        .collect();
    counts.sort_by(|a, b| a.0.cmp(&b.0));
    counts
}

impl Default for LookupMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSink for LookupMetrics {
    fn increment_endpoint_call(&self, endpoint: &str) {
        Self::bump(&self.endpoint_calls, endpoint);
    }

    fn increment_lookup(&self, domain: &str) {
        Self::bump(&self.lookups, domain);
    }

    fn observe_lookup_duration(&self, seconds: f64) {
        if !seconds.is_finite() || seconds < 0.0 {
            return;
        }
        self.duration_count.fetch_add(1, Ordering::Relaxed);
        self.duration_sum_us
            .fetch_add((seconds * 1_000_000.0) as u64, Ordering::Relaxed);
    }
}

impl MetricsExporter for LookupMetrics {
    fn render(&self) -> String {
        prometheus::render(&self.snapshot())
    }
}
