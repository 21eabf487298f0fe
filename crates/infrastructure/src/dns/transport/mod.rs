pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_census_domain::DomainError;
use tokio::time::Instant;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
    pub protocol_used: &'static str,
}

/// One request/response exchange with the upstream server. Every call uses
/// its own socket or connection and gives up with `QueryTimeout` once
/// `deadline` passes.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        deadline: Instant,
    ) -> Result<TransportResponse, DomainError>;
}
