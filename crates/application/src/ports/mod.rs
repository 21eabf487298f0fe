mod domain_source;
mod record_resolver;
mod record_sink;

pub use domain_source::DomainSource;
pub use record_resolver::RecordResolver;
pub use record_sink::{RecordSink, RecordSinkFactory};

// Re-export for convenience
pub use ferrous_census_domain::{Answer, CanonicalRecord, RecordType};
