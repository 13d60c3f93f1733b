use hostprobe_domain::config::DatabaseConfig;
use hostprobe_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(url = %cfg.url, "Initializing database");

    let pool = create_pool(cfg).await.map_err(|e| {
        error!(error = %e, "Failed to initialize database");
        anyhow::anyhow!(e)
    })?;

    Ok(pool)
}
