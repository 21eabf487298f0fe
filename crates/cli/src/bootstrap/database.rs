use ferrous_census_domain::DatabaseConfig;
use ferrous_census_infrastructure::repositories::SqlRecordSinkFactory;
use tracing::{error, info};

pub async fn init_record_sinks(cfg: &DatabaseConfig) -> anyhow::Result<SqlRecordSinkFactory> {
    info!("Initializing record sink: {}", cfg.redacted_url());

    let factory = SqlRecordSinkFactory::from_config(cfg).await.map_err(|e| {
        error!("Failed to initialize record sink: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(create_table = cfg.create_table, "Record sink ready");
    Ok(factory)
}
