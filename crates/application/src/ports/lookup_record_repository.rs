use async_trait::async_trait;
use hostprobe_domain::{DomainError, LookupRecord};

#[async_trait]
pub trait LookupRecordRepository: Send + Sync {
    /// Persists one record atomically. Fails with `DomainError::DatabaseError`.
    async fn append(&self, record: &LookupRecord) -> Result<(), DomainError>;

    /// Newest first by `created_time`, later inserts first on ties.
    async fn get_recent(&self, limit: u32) -> Result<Vec<LookupRecord>, DomainError>;
}
