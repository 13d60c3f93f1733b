pub mod dto;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::create_api_routes;
pub use state::{AppState, RuntimeInfo};
