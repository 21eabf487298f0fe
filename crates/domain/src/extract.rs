use crate::dns_record::{Answer, AnswerData, RecordType};

/// Pulls the human-readable value out of an answer.
///
/// - A / AAAA: the address text
/// - NS / CNAME: the target host
/// - MX: the mail exchanger host
/// - SOA: the responsible mailbox
/// - TXT: the first string of the record
///
/// A payload that does not match `record_type`, an empty TXT record or any
/// other type yields an empty string.
pub fn extract(record_type: RecordType, answer: &Answer) -> String {
    match (record_type, &answer.data) {
        (RecordType::A, AnswerData::A(addr)) => addr.to_string(),
        (RecordType::AAAA, AnswerData::AAAA(addr)) => addr.to_string(),
        (RecordType::NS, AnswerData::NS(host)) | (RecordType::CNAME, AnswerData::CNAME(host)) => {
            host.clone()
        }
        (RecordType::MX, AnswerData::MX { exchange, .. }) => exchange.clone(),
        (RecordType::SOA, AnswerData::SOA { rname, .. }) => rname.clone(),
        (RecordType::TXT, AnswerData::TXT(strings)) => {
            strings.first().cloned().unwrap_or_default()
        }
        _ => String::new(),
    }
}
