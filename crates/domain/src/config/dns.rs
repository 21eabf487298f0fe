use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream resolver, `ip` or `ip:port`. Port 53 when omitted.
    #[serde(default = "default_resolver")]
    pub resolver: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Repeat truncated UDP answers over TCP.
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolver: default_resolver(),
            query_timeout_ms: default_query_timeout_ms(),
            tcp_fallback: true,
        }
    }
}

impl DnsConfig {
    pub fn resolver_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = self.resolver.trim();
        if let Ok(addr) = raw.parse::<SocketAddr>() {
            return Ok(addr);
        }
        raw.trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
            .map_err(|_| {
                ConfigError::Validation(format!(
                    "DNS resolver must be an IP address or ip:port, got '{}'",
                    self.resolver
                ))
            })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

fn default_resolver() -> String {
    "8.8.8.8".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2_000
}

fn default_true() -> bool {
    true
}
