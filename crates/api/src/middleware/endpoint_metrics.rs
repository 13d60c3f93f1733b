use crate::state::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

pub async fn track_endpoint_calls(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let endpoint = endpoint_name(&request);
    state.metrics.increment_endpoint_call(&endpoint);
    next.run(request).await
}

/// Route template when the router matched one, raw path otherwise.
pub fn endpoint_name(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}
