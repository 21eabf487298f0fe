use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of one answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    MX {
        preference: u16,
        exchange: String,
    },
    SOA {
        mname: String,
        rname: String,
        serial: u32,
    },
    TXT(Vec<String>),
    Unsupported,
}

impl AnswerData {
    /// The record type this payload shape belongs to, if it has one.
    pub fn natural_type(&self) -> Option<RecordType> {
        match self {
            AnswerData::A(_) => Some(RecordType::A),
            AnswerData::AAAA(_) => Some(RecordType::AAAA),
            AnswerData::NS(_) => Some(RecordType::NS),
            AnswerData::CNAME(_) => Some(RecordType::CNAME),
            AnswerData::MX { .. } => Some(RecordType::MX),
            AnswerData::SOA { .. } => Some(RecordType::SOA),
            AnswerData::TXT(_) => Some(RecordType::TXT),
            AnswerData::Unsupported => None,
        }
    }
}

/// One resource record from the answer section of a response.
///
/// `record_type` is read from the record header, which can differ from the
/// type that was asked for (a CNAME returned for an A query, for instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub data: AnswerData,
}

impl Answer {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: AnswerData,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data,
        }
    }

    /// Builds an answer whose header type matches its payload.
    /// Unsupported payloads get `TYPE0`.
    pub fn from_data(name: impl Into<String>, ttl: u32, data: AnswerData) -> Self {
        let record_type = data.natural_type().unwrap_or(RecordType::Other(0));
        Self::new(name, record_type, ttl, data)
    }
}
