pub mod history;
pub mod lookup;
pub mod tools;

pub use history::GetHistoryUseCase;
pub use lookup::{LookupDomainUseCase, LookupRequest};
pub use tools::ValidateIpUseCase;
