use crate::{
    dto::{HealthResponse, RootResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip_all, name = "api_root")]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        version: state.runtime.version.clone(),
        date: chrono::Utc::now().timestamp(),
        kubernetes: state.runtime.kubernetes,
    })
}

pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse { status: "OK" })
}
