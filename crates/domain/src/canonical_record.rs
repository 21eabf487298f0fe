use crate::dns_record::{Answer, RecordType};
use crate::extract::extract;
use crate::ip_encoding::{encode_ip, IpEncoding};
use std::sync::Arc;

/// Normalized form of one DNS answer, as carried from the resolution
/// workers to the persistence workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    domain: Arc<str>,
    record_type: RecordType,
    value: String,
    ip_encoding: IpEncoding,
}

impl CanonicalRecord {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType, value: String) -> Self {
        let ip_encoding = encode_ip(&value);
        Self {
            domain: domain.into(),
            record_type,
            value,
            ip_encoding,
        }
    }

    /// Uses the type from the answer header, not the type that was queried.
    pub fn from_answer(domain: impl Into<Arc<str>>, answer: &Answer) -> Self {
        Self::new(domain, answer.record_type, extract(answer.record_type, answer))
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn ip_encoding(&self) -> IpEncoding {
        self.ip_encoding
    }
}
