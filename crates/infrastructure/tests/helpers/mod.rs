pub mod dns_server_mock;

pub use builders::RecordBuilder;
pub use dns_server_mock::{MockDnsServer, MockZone};
