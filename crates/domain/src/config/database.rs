use serde::{Deserialize, Serialize};

/// Database configuration for the lookup history
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string (default: "sqlite:./hostprobe.db")
    #[serde(default = "default_db_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds a writer waits on a locked database before failing
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Number of records returned by the history endpoint (default: 20)
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_db_url() -> String {
    "sqlite:./hostprobe.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    5
}

fn default_history_limit() -> u32 {
    20
}
