use ferrous_census_domain::DnsConfig;
use ferrous_census_infrastructure::dns::UpstreamRecordResolver;
use tracing::info;

pub fn init_resolver(cfg: &DnsConfig) -> anyhow::Result<UpstreamRecordResolver> {
    let resolver = UpstreamRecordResolver::from_config(cfg)?;
    info!(
        server = %resolver.server(),
        tcp_fallback = cfg.tcp_fallback,
        "Upstream resolver configured"
    );
    Ok(resolver)
}
