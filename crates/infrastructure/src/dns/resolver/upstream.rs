use crate::dns::forwarding::{MessageBuilder, ParsedResponse, ResponseParser};
use crate::dns::transport::{DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use ferrous_census_application::ports::RecordResolver;
use ferrous_census_domain::{Answer, DnsConfig, DomainError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Resolves `(domain, type)` pairs against one fixed upstream server.
///
/// Each call sends over UDP from a fresh ephemeral socket and, when the
/// answer comes back truncated and TCP fallback is on, repeats the query
/// over a fresh TCP connection. No state is shared between calls.
///
/// `timeout` bounds the whole call: the TCP retry only gets what the UDP
/// leg left of it.
pub struct UpstreamRecordResolver {
    server: SocketAddr,
    timeout: Duration,
    tcp_fallback: bool,
    udp: UdpTransport,
    tcp: TcpTransport,
}

impl UpstreamRecordResolver {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            server,
            timeout,
            tcp_fallback: true,
            udp: UdpTransport::new(server),
            tcp: TcpTransport::new(server),
        }
    }

    pub fn from_config(config: &DnsConfig) -> Result<Self, DomainError> {
        let server = config
            .resolver_addr()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        Ok(Self::new(server, config.query_timeout()).with_tcp_fallback(config.tcp_fallback))
    }

    pub fn with_tcp_fallback(mut self, enabled: bool) -> Self {
        self.tcp_fallback = enabled;
        self
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        id: u16,
        query: &[u8],
        deadline: Instant,
    ) -> Result<ParsedResponse, DomainError> {
        let response = transport.send(query, deadline).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response ID {} does not match query ID {}",
                response.protocol_used, parsed.id, id
            )));
        }
        Ok(parsed)
    }
}

#[async_trait]
impl RecordResolver for UpstreamRecordResolver {
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<Answer>, DomainError> {
        let (id, query) = MessageBuilder::build_query(domain, record_type)?;
        let deadline = Instant::now() + self.timeout;

        let mut parsed = self.exchange(&self.udp, id, &query, deadline).await?;

        if parsed.truncated && self.tcp_fallback {
            debug!(
                domain = %domain,
                record_type = %record_type,
                server = %self.server,
                "Truncated UDP response, retrying over TCP"
            );
            parsed = self.exchange(&self.tcp, id, &query, deadline).await?;
        }

        if parsed.is_nxdomain() {
            debug!(domain = %domain, record_type = %record_type, "NXDOMAIN");
        }

        parsed.into_answers()
    }
}
