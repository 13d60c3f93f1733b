use hostprobe_infrastructure::repositories::SqliteLookupRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pool: SqlitePool,
    pub lookup_records: Arc<SqliteLookupRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            lookup_records: Arc::new(SqliteLookupRecordRepository::new(pool.clone())),
            pool,
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
