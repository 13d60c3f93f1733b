pub mod endpoint_metrics;

pub use endpoint_metrics::{endpoint_name, track_endpoint_calls};
