//! UDP transport (RFC 1035 §4.2.1). No framing; a truncated answer has the
//! TC bit set and should be retried over TCP.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_census_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

fn message_id(bytes: &[u8]) -> Option<u16> {
    match bytes {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        deadline: Instant,
    ) -> Result<TransportResponse, DomainError> {
        let query_id = message_id(message_bytes).ok_or_else(|| {
            DomainError::transport(self.server_addr, "query shorter than a DNS header")
        })?;

        let socket = UdpSocket::bind(self.bind_addr()).await.map_err(|e| {
            DomainError::transport(self.server_addr, format!("failed to bind UDP socket: {}", e))
        })?;

        let bytes_sent = timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::transport(self.server_addr, format!("UDP send failed: {}", e))
            })?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        // Stray datagrams (wrong peer or stale ID) are dropped; keep
        // listening until the real reply arrives or the deadline passes.
        let bytes_received = loop {
            let (bytes_received, from_addr) =
                timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| DomainError::QueryTimeout)?
                    .map_err(|e| {
                        DomainError::transport(
                            self.server_addr,
                            format!("UDP receive failed: {}", e),
                        )
                    })?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "Ignoring UDP datagram from unexpected source"
                );
                continue;
            }

            match message_id(&recv_buf[..bytes_received]) {
                Some(id) if id == query_id => break bytes_received,
                id => {
                    warn!(
                        server = %self.server_addr,
                        expected_id = query_id,
                        received_id = ?id,
                        "Ignoring UDP datagram with mismatched ID"
                    );
                }
            }
        };

        recv_buf.truncate(bytes_received);
        debug!(server = %self.server_addr, bytes_received, "UDP response received");

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }
}
