/// Best-effort operational counters. Recording never fails and never blocks
/// the caller.
pub trait MetricsSink: Send + Sync {
    fn increment_endpoint_call(&self, endpoint: &str);

    fn increment_lookup(&self, domain: &str);

    fn observe_lookup_duration(&self, seconds: f64);
}

/// Text exposition of the collected metrics.
pub trait MetricsExporter: Send + Sync {
    fn render(&self) -> String;
}
