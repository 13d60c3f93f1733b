use hostprobe_application::ports::{MetricsExporter, MetricsSink};
use hostprobe_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase, ValidateIpUseCase};
use std::sync::Arc;

/// Facts about the running process, fixed at startup.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub version: String,
    pub kubernetes: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub lookup_domain: Arc<LookupDomainUseCase>,
    pub get_history: Arc<GetHistoryUseCase>,
    pub validate_ip: Arc<ValidateIpUseCase>,
    pub metrics: Arc<dyn MetricsSink>,
    pub metrics_exporter: Arc<dyn MetricsExporter>,
    pub runtime: RuntimeInfo,
}
