use hostprobe_application::services::{HostLookupService, QueryIdGenerator};
use hostprobe_infrastructure::dns::SystemHostResolver;
use hostprobe_infrastructure::metrics::LookupMetrics;
use std::sync::Arc;

/// Process-wide singletons shared by every request.
pub struct Services {
    pub lookup: Arc<HostLookupService>,
    pub metrics: Arc<LookupMetrics>,
    pub query_ids: Arc<QueryIdGenerator>,
}

impl Services {
    pub fn new() -> Self {
        Self {
            lookup: Arc::new(HostLookupService::new(Arc::new(SystemHostResolver::new()))),
            metrics: Arc::new(LookupMetrics::new()),
            query_ids: Arc::new(QueryIdGenerator::new()),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
