use hostprobe_domain::{CliOverrides, Config};
use tracing::info;

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const KUBERNETES_ENV: &str = "KUBERNETES_SERVICE_HOST";

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        history_limit = config.database.history_limit,
        "Configuration loaded"
    );

    Ok(config)
}

/// A `--database-url` flag wins over `DATABASE_URL`; both beat the file.
pub fn database_url_override(cli_value: Option<String>) -> Option<String> {
    cli_value.or_else(|| {
        std::env::var(DATABASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
    })
}

pub fn running_in_kubernetes() -> bool {
    std::env::var_os(KUBERNETES_ENV).is_some()
}
