//! Ferrous Census Domain Layer
pub mod canonical_record;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod extract;
pub mod ip_encoding;

pub use canonical_record::CanonicalRecord;
pub use config::{CliOverrides, Config, ConfigError, DatabaseConfig, DnsConfig};
pub use dns_record::{Answer, AnswerData, RecordType};
pub use errors::DomainError;
pub use extract::extract;
pub use ip_encoding::{encode_ip, IpEncoding};
