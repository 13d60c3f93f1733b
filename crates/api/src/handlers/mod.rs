pub mod history;
pub mod lookup;
pub mod meta;
pub mod metrics;
pub mod validate;

pub use history::get_history;
pub use lookup::lookup_domain;
pub use meta::{health_check, root};
pub use metrics::get_metrics;
pub use validate::validate_ip;
