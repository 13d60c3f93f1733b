use crate::ports::{LookupRecordRepository, MetricsSink};
use crate::services::{HostLookupService, QueryIdGenerator};
use hostprobe_domain::{validate_domain, DomainError, LookupRecord};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Inbound lookup as received from the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct LookupRequest {
    pub domain: Option<String>,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
}

impl LookupRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Default::default()
        }
    }

    pub fn with_client(mut self, client_ip: Option<String>, user_agent: Option<String>) -> Self {
        self.client_ip = client_ip;
        self.user_agent = user_agent;
        self
    }
}

/// Validate, resolve, persist, then report.
///
/// Every exit observes one duration sample. A failed validation never reaches
/// the resolver, and only a committed record produces a successful result.
pub struct LookupDomainUseCase {
    lookup: Arc<HostLookupService>,
    repository: Arc<dyn LookupRecordRepository>,
    metrics: Arc<dyn MetricsSink>,
    query_ids: Arc<QueryIdGenerator>,
}

impl LookupDomainUseCase {
    pub fn new(
        lookup: Arc<HostLookupService>,
        repository: Arc<dyn LookupRecordRepository>,
        metrics: Arc<dyn MetricsSink>,
        query_ids: Arc<QueryIdGenerator>,
    ) -> Self {
        Self {
            lookup,
            repository,
            metrics,
            query_ids,
        }
    }

    #[instrument(skip(self, request), name = "lookup_domain", fields(domain = request.domain.as_deref().unwrap_or("")))]
    pub async fn execute(&self, request: LookupRequest) -> Result<LookupRecord, DomainError> {
        let started = Instant::now();
        let result = self.run(request).await;
        self.metrics
            .observe_lookup_duration(started.elapsed().as_secs_f64());
        result
    }

    async fn run(&self, request: LookupRequest) -> Result<LookupRecord, DomainError> {
        let query_id = self.query_ids.next();

        let domain = match request.domain {
            Some(domain) if validate_domain(&domain) => domain,
            other => {
                debug!(input = other.as_deref().unwrap_or(""), "Rejected domain");
                return Err(DomainError::InvalidDomainName(other.unwrap_or_default()));
            }
        };

        let resolution = self.lookup.resolve(&domain).await;
        let elapsed = match resolution.elapsed {
            Some(elapsed) if resolution.is_success() => elapsed,
            _ => {
                info!(%query_id, "Host not found");
                return Err(DomainError::HostNotFound(domain));
            }
        };

        // Taken after resolution so creation order follows append order.
        let created_time = chrono::Utc::now().timestamp();
        let record = LookupRecord::success(
            query_id,
            domain.as_str(),
            resolution.addresses,
            created_time,
            elapsed,
        )
        .with_client(request.client_ip, request.user_agent);

        if !record.is_persistable() {
            warn!(%query_id, "Refusing to persist malformed lookup record");
            return Err(DomainError::DatabaseError(
                "lookup record violates history constraints".to_string(),
            ));
        }

        if let Err(e) = self.repository.append(&record).await {
            error!(%query_id, error = %e, "Failed to persist lookup record");
            return Err(e);
        }

        self.metrics.increment_lookup(&domain);

        info!(
            %query_id,
            addresses = record.addresses.len(),
            response_time = record.response_time.unwrap_or_default(),
            "Lookup completed"
        );

        Ok(record)
    }
}
