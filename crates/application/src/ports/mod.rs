mod host_resolver;
mod lookup_record_repository;
mod metrics_sink;

pub use host_resolver::HostResolver;
pub use lookup_record_repository::LookupRecordRepository;
pub use metrics_sink::{MetricsExporter, MetricsSink};
