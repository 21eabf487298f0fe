use super::record_type_map::RecordTypeMapper;
use ferrous_census_domain::{Answer, AnswerData, DomainError};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// Decoded response: header bits plus the answer section in domain form.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    pub truncated: bool,
    pub answers: Vec<Answer>,
}

impl ParsedResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// NOERROR and NXDOMAIN both carry a usable (possibly empty) answer set.
    pub fn is_answerable(&self) -> bool {
        matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }

    /// Answers for an answerable response, `ServerFailure` for anything else.
    pub fn into_answers(self) -> Result<Vec<Answer>, DomainError> {
        if self.is_answerable() {
            Ok(self.answers)
        } else {
            Err(DomainError::ServerFailure(
                ResponseParser::rcode_to_status(self.rcode).to_string(),
            ))
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers: Vec<Answer> = message.answers().iter().map(Self::to_answer).collect();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    /// The header type is taken from the record, not inferred from the payload.
    pub fn to_answer(record: &Record) -> Answer {
        let record_type = RecordTypeMapper::from_hickory(record.record_type());
        Answer::new(
            record.name().to_utf8(),
            record_type,
            record.ttl(),
            Self::to_answer_data(record.data()),
        )
    }

    fn to_answer_data(data: &RData) -> AnswerData {
        match data {
            RData::A(a) => AnswerData::A(a.0),
            RData::AAAA(aaaa) => AnswerData::AAAA(aaaa.0),
            RData::NS(ns) => AnswerData::NS(ns.0.to_utf8()),
            RData::CNAME(cname) => AnswerData::CNAME(cname.0.to_utf8()),
            RData::MX(mx) => AnswerData::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::SOA(soa) => AnswerData::SOA {
                mname: soa.mname().to_utf8(),
                rname: soa.rname().to_utf8(),
                serial: soa.serial(),
            },
            RData::TXT(txt) => AnswerData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                    .collect(),
            ),
            _ => AnswerData::Unsupported,
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
