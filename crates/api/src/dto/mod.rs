pub mod lookup;
pub mod meta;
pub mod validate;

pub use lookup::{AddressEntry, LookupParams, LookupResponse};
pub use meta::{HealthResponse, MessageResponse, RootResponse};
pub use validate::{ValidateIpRequest, ValidateIpResponse};
