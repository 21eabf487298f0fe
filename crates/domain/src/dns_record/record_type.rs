use std::fmt;
use std::str::FromStr;

/// Record types the enumerator queries, plus a catch-all for answer headers
/// carrying any other type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    NS,
    MX,
    SOA,
    CNAME,
    TXT,
    Other(u16),
}

impl RecordType {
    /// Queried first. An empty answer for it ends enumeration of the domain.
    pub const GATEKEEPER: RecordType = RecordType::NS;

    /// Per-domain query order. The gatekeeper always comes first.
    pub const QUERY_ORDER: [RecordType; 7] = [
        RecordType::NS,
        RecordType::A,
        RecordType::AAAA,
        RecordType::MX,
        RecordType::SOA,
        RecordType::CNAME,
        RecordType::TXT,
    ];

    pub fn is_gatekeeper(&self) -> bool {
        *self == Self::GATEKEEPER
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::NS => f.write_str("NS"),
            RecordType::MX => f.write_str("MX"),
            RecordType::SOA => f.write_str("SOA"),
            RecordType::CNAME => f.write_str("CNAME"),
            RecordType::TXT => f.write_str("TXT"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "NS" => Ok(RecordType::NS),
            "MX" => Ok(RecordType::MX),
            "SOA" => Ok(RecordType::SOA),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            _ => upper
                .strip_prefix("TYPE")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordType::from_u16)
                .ok_or_else(|| format!("Unknown record type: {}", s)),
        }
    }
}
