use ferrous_census_domain::Config;
use std::time::Duration;

/// Immutable sizing of the pipeline, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub resolution_workers: usize,
    pub persistence_workers: usize,
    pub input_queue_capacity: usize,
    pub output_queue_capacity: usize,
    /// Upper bound on a single `(domain, record_type)` query.
    pub query_timeout: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            resolution_workers: 10,
            persistence_workers: 10,
            input_queue_capacity: 100,
            output_queue_capacity: 100,
            query_timeout: Duration::from_secs(2),
        }
    }
}

impl From<&Config> for PipelineSettings {
    fn from(config: &Config) -> Self {
        Self {
            resolution_workers: config.pipeline.resolution_workers,
            persistence_workers: config.pipeline.persistence_workers,
            input_queue_capacity: config.pipeline.input_queue_capacity,
            output_queue_capacity: config.pipeline.output_queue_capacity,
            query_timeout: config.dns.query_timeout(),
        }
    }
}
