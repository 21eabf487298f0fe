//! TCP transport (RFC 1035 §4.2.2): every message carries a two-byte
//! big-endian length prefix. A fresh connection is opened per query.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_census_domain::DomainError;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn connect(&self, deadline: Instant) -> Result<TcpStream, DomainError> {
        let stream = timeout_at(deadline, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::transport(self.server_addr, format!("TCP connect failed: {}", e))
            })?;

        stream.set_nodelay(true).map_err(|e| {
            DomainError::transport(self.server_addr, format!("failed to set TCP_NODELAY: {}", e))
        })?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        deadline: Instant,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(deadline).await?;

        timeout_at(deadline, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::transport(self.server_addr, e))?;

        debug!(server = %self.server_addr, message_len = message_bytes.len(), "TCP query sent");

        let response_bytes = timeout_at(deadline, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::transport(self.server_addr, e))?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), String>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len())
        .map_err(|_| format!("query too large: {} bytes", message_bytes.len()))?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| format!("failed to write length prefix: {}", e))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| format!("failed to write DNS message: {}", e))?;
    stream
        .flush()
        .await
        .map_err(|e| format!("failed to flush stream: {}", e))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, String>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| format!("failed to read response length: {}", e))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;
    if response_len > MAX_TCP_MESSAGE_SIZE {
        return Err(format!(
            "response too large: {} bytes (max {})",
            response_len, MAX_TCP_MESSAGE_SIZE
        ));
    }

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| format!("failed to read response body: {}", e))?;

    Ok(response)
}
