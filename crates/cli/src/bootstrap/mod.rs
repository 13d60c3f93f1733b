pub mod config;
pub mod database;
pub mod logging;

pub use config::{database_url_override, load_config, running_in_kubernetes};
pub use database::init_database;
pub use logging::init_logging;
