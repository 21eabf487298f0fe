use ferrous_census_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged after the subscriber is installed, so it can't live in `load_config`.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    let config_file = config_path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "default".to_string());

    info!(
        config_file = %config_file,
        domains_file = %config.pipeline.domains_file,
        resolution_workers = config.pipeline.resolution_workers,
        persistence_workers = config.pipeline.persistence_workers,
        input_queue_capacity = config.pipeline.input_queue_capacity,
        output_queue_capacity = config.pipeline.output_queue_capacity,
        resolver = %config.dns.resolver,
        query_timeout_ms = config.dns.query_timeout_ms,
        "Configuration loaded"
    );
}
