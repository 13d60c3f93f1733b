use crate::handlers;
use crate::middleware::track_endpoint_calls;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Creates all API routes with state. Every matched request is counted once
/// in the endpoint-call metric, whatever its outcome.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::get_metrics))
        .route("/v1/tools/lookup", get(handlers::lookup_domain))
        .route("/v1/tools/validate", post(handlers::validate_ip))
        .route("/v1/history", get(handlers::get_history))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            track_endpoint_calls,
        ))
        .with_state(state)
}
