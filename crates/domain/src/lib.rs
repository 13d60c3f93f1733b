//! Hostprobe Domain Layer
pub mod config;
pub mod errors;
pub mod lookup_record;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use lookup_record::{LookupRecord, QueryId, QueryStatus};
pub use validators::{validate_domain, validate_ipv4};
