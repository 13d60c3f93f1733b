use crate::dto::MessageResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hostprobe_domain::DomainError;
use tracing::error;

pub const INVALID_DOMAIN_MESSAGE: &str = "Domain parameter is Not Valid or Provided";
pub const HOST_NOT_FOUND_MESSAGE: &str = "The Host IP Not Found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidDomainName(_) => {
                (StatusCode::BAD_REQUEST, INVALID_DOMAIN_MESSAGE.to_string())
            }
            DomainError::HostNotFound(_) => {
                (StatusCode::NOT_FOUND, HOST_NOT_FOUND_MESSAGE.to_string())
            }
            DomainError::DatabaseError(e) => {
                error!(error = %e, "Request failed on storage");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}
