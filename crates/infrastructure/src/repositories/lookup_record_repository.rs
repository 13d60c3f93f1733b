use async_trait::async_trait;
use hostprobe_application::ports::LookupRecordRepository;
use hostprobe_domain::{DomainError, LookupRecord, QueryId, QueryStatus};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Append-only lookup history backed by the `lookup_records` table.
///
/// Each record is written with a single INSERT, so concurrent appends never
/// interleave within a row.
pub struct SqliteLookupRecordRepository {
    pool: SqlitePool,
}

impl SqliteLookupRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn encode_addresses(addresses: &[Ipv4Addr]) -> Result<String, DomainError> {
        let values: Vec<String> = addresses.iter().map(|a| a.to_string()).collect();
        serde_json::to_string(&values)
            .map_err(|e| DomainError::DatabaseError(format!("Failed to encode addresses: {}", e)))
    }

    fn decode_addresses(raw: &str) -> Option<Vec<Ipv4Addr>> {
        let values: Vec<String> = serde_json::from_str(raw).ok()?;
        values.iter().map(|v| v.parse().ok()).collect()
    }

    fn row_to_record(row: &SqliteRow) -> Result<LookupRecord, DomainError> {
        let id: i64 = row.try_get("id").map_err(Self::column_error)?;
        let raw_addresses: String = row.try_get("addresses").map_err(Self::column_error)?;
        let status: String = row.try_get("query_status").map_err(Self::column_error)?;
        let domain: String = row.try_get("domain").map_err(Self::column_error)?;

        let addresses = Self::decode_addresses(&raw_addresses).ok_or_else(|| {
            error!(id, "Lookup record has unreadable addresses");
            DomainError::DatabaseError(format!("Unreadable addresses in lookup record {}", id))
        })?;

        let query_status = QueryStatus::from_str(&status).ok_or_else(|| {
            error!(id, status = %status, "Lookup record has unknown status");
            DomainError::DatabaseError(format!("Unknown status in lookup record {}", id))
        })?;

        Ok(LookupRecord {
            query_id: QueryId(row.try_get::<i64, _>("query_id").map_err(Self::column_error)? as u64),
            domain: Arc::from(domain.as_str()),
            addresses,
            created_time: row.try_get("created_time").map_err(Self::column_error)?,
            client_ip: row.try_get("client_ip").map_err(Self::column_error)?,
            user_agent: row.try_get("user_agent").map_err(Self::column_error)?,
            query_status,
            response_time: row.try_get("response_time").map_err(Self::column_error)?,
        })
    }

    fn column_error(e: sqlx::Error) -> DomainError {
        error!(error = %e, "Failed to read lookup record column");
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl LookupRecordRepository for SqliteLookupRecordRepository {
    #[instrument(skip(self, record), fields(query_id = %record.query_id, domain = %record.domain))]
    async fn append(&self, record: &LookupRecord) -> Result<(), DomainError> {
        if !record.is_persistable() {
            return Err(DomainError::DatabaseError(
                "Only successful lookups with distinct addresses can be stored".to_string(),
            ));
        }

        let addresses = Self::encode_addresses(&record.addresses)?;

        sqlx::query(
            "INSERT INTO lookup_records (query_id, domain, addresses, created_time, client_ip, user_agent, query_status, response_time)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.query_id.as_u64() as i64)
        .bind(record.domain.as_ref())
        .bind(&addresses)
        .bind(record.created_time)
        .bind(record.client_ip.as_deref())
        .bind(record.user_agent.as_deref())
        .bind(record.query_status.as_str())
        .bind(record.response_time)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to append lookup record");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(addresses = record.addresses.len(), "Lookup record appended");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_recent(&self, limit: u32) -> Result<Vec<LookupRecord>, DomainError> {
        debug!(limit, "Fetching recent lookups");

        let rows = sqlx::query(
            "SELECT id, query_id, domain, addresses, created_time, client_ip, user_agent, query_status, response_time
             FROM lookup_records
             ORDER BY created_time DESC, id DESC
             LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch recent lookups");
            DomainError::DatabaseError(e.to_string())
        })?;

        let records = rows
            .iter()
            .map(Self::row_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = records.len(), "Recent lookups fetched");
        Ok(records)
    }
}
