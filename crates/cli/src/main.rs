use clap::Parser;
use hostprobe_api::{AppState, RuntimeInfo};
use hostprobe_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "hostprobe")]
#[command(version)]
#[command(about = "Hostprobe - domain lookup service with persisted history")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database connection string (falls back to DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_url: bootstrap::database_url_override(cli.database_url),
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let runtime = RuntimeInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        kubernetes: bootstrap::running_in_kubernetes(),
    };
    info!(
        version = %runtime.version,
        kubernetes = runtime.kubernetes,
        "Starting Hostprobe"
    );

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let services = di::Services::new();
    let use_cases = di::UseCases::new(&config, &repos, &services);

    let app_state = AppState {
        lookup_domain: use_cases.lookup_domain,
        get_history: use_cases.get_history,
        validate_ip: use_cases.validate_ip,
        metrics: services.metrics.clone(),
        metrics_exporter: services.metrics,
        runtime,
    };

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, &config.server, app_state).await?;

    repos.close().await;
    info!("Server shutdown complete");
    Ok(())
}
