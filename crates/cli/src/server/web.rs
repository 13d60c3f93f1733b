use axum::{http::HeaderValue, Router};
use hostprobe_api::{create_api_routes, AppState};
use hostprobe_domain::config::ServerConfig;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    cfg: &ServerConfig,
    state: AppState,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        api_url = format!("http://{}/v1", bind_addr),
        "Starting web server"
    );

    let app = create_app(state, &cfg.cors_allowed_origins);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    create_api_routes(state)
        .layer(build_cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    if parsed.is_empty() {
        warn!("No valid CORS origins configured, cross-origin requests will be refused");
        return CorsLayer::new().allow_methods(Any).allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
