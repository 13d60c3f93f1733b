use crate::ports::LookupRecordRepository;
use hostprobe_domain::{DomainError, LookupRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

const MAX_LIMIT: u32 = 1_000;

pub struct GetHistoryUseCase {
    repository: Arc<dyn LookupRecordRepository>,
    limit: u32,
}

impl GetHistoryUseCase {
    pub fn new(repository: Arc<dyn LookupRecordRepository>, limit: u32) -> Self {
        Self {
            repository,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// An empty history is an empty list, not an error.
    #[instrument(skip(self), name = "get_history")]
    pub async fn execute(&self) -> Result<Vec<LookupRecord>, DomainError> {
        let records = self.repository.get_recent(self.limit).await?;
        debug!(count = records.len(), limit = self.limit, "History fetched");
        Ok(records)
    }
}
