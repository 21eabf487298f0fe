use std::fmt;
use std::net::IpAddr;

/// Unsigned integer form of an IP literal: IPv4 as its 4 address bytes,
/// IPv6 as its 16 address bytes, both big-endian. Zero for non-IP values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IpEncoding(u128);

impl IpEncoding {
    pub const ZERO: IpEncoding = IpEncoding(0);

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<IpAddr> for IpEncoding {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => IpEncoding(u32::from_be_bytes(v4.octets()) as u128),
            IpAddr::V6(v6) => IpEncoding(u128::from_be_bytes(v6.octets())),
        }
    }
}

impl From<u128> for IpEncoding {
    fn from(value: u128) -> Self {
        IpEncoding(value)
    }
}

impl fmt::Display for IpEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses `text` as an IPv4 or IPv6 literal. Anything that is not an IP
/// literal encodes as zero.
pub fn encode_ip(text: &str) -> IpEncoding {
    text.parse::<IpAddr>()
        .map(IpEncoding::from)
        .unwrap_or(IpEncoding::ZERO)
}
