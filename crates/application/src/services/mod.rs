pub mod host_lookup_service;
pub mod query_id_generator;

pub use host_lookup_service::{HostLookupService, Resolution};
pub use query_id_generator::QueryIdGenerator;
