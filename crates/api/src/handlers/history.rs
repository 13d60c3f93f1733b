use crate::{dto::LookupResponse, errors::ApiError, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip_all, name = "api_get_history")]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<LookupResponse>>, ApiError> {
    let records = state.get_history.execute().await?;
    debug!(count = records.len(), "History retrieved");

    Ok(Json(
        records.into_iter().map(LookupResponse::from).collect(),
    ))
}
