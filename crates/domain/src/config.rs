pub mod database;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod pipeline;
pub mod root;

pub use database::DatabaseConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use pipeline::PipelineConfig;
pub use root::{CliOverrides, Config};
