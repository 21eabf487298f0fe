//! Mapping between `ferrous_census_domain::RecordType` and `hickory_proto::rr::RecordType`.

use ferrous_census_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::Other(code) => HickoryRecordType::from(code),
        }
    }

    /// Never fails: codes outside the queried set become `RecordType::Other`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::NS => RecordType::NS,
            HickoryRecordType::MX => RecordType::MX,
            HickoryRecordType::SOA => RecordType::SOA,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::TXT => RecordType::TXT,
            other => RecordType::Other(u16::from(other)),
        }
    }
}
