pub mod config;
pub mod database;
pub mod dns;
pub mod logging;

pub use config::load_config;
pub use database::init_record_sinks;
pub use dns::init_resolver;
pub use logging::init_logging;
