use crate::{
    dto::{LookupParams, LookupResponse},
    errors::ApiError,
    extractors::ClientInfo,
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use hostprobe_application::use_cases::LookupRequest;
use tracing::{debug, instrument};

/// An unparseable query string reaches the pipeline as a missing domain.
#[instrument(skip_all, name = "api_lookup_domain", fields(client_ip = client.ip.as_deref().unwrap_or("")))]
pub async fn lookup_domain(
    State(state): State<AppState>,
    client: ClientInfo,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<LookupResponse>, ApiError> {
    let params = match query {
        Ok(Query(pairs)) => LookupParams::from_pairs(pairs),
        Err(e) => {
            debug!(error = %e, "Unreadable lookup query string");
            LookupParams::default()
        }
    };

    let request = LookupRequest {
        domain: params.domain,
        client_ip: client.ip,
        user_agent: client.user_agent,
    };

    let record = state.lookup_domain.execute(request).await?;
    Ok(Json(LookupResponse::from(record)))
}
