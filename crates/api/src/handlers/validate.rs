use crate::{
    dto::{ValidateIpRequest, ValidateIpResponse},
    state::AppState,
};
use axum::{body::Bytes, extract::State, Json};
use tracing::{debug, instrument};

/// An unreadable body is answered like a missing `ip`.
#[instrument(skip_all, name = "api_validate_ip")]
pub async fn validate_ip(State(state): State<AppState>, body: Bytes) -> Json<ValidateIpResponse> {
    let request: ValidateIpRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "Unreadable validate body");
            ValidateIpRequest::default()
        }
    };

    let valid = state.validate_ip.execute(request.ip.as_deref());
    Json(ValidateIpResponse::from_validity(valid))
}
