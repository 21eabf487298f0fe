use super::{PersistenceStats, ResolutionStats};
use ferrous_census_domain::DomainError;
use std::time::Duration;
use tracing::{info, warn};

/// Totals for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub domains_read: u64,
    pub domains_resolved: u64,
    pub gatekeeper_skips: u64,
    pub queries: u64,
    pub query_failures: u64,
    pub records_emitted: u64,
    pub records_persisted: u64,
    pub insert_failures: u64,
    /// Workers whose task panicked instead of returning stats.
    pub worker_panics: u64,
    pub elapsed: Duration,
    /// Set when the source failed before it was exhausted.
    pub source_error: Option<DomainError>,
}

impl PipelineReport {
    pub fn absorb_resolution(&mut self, stats: &ResolutionStats) {
        self.domains_resolved += stats.domains;
        self.gatekeeper_skips += stats.gatekeeper_skips;
        self.queries += stats.queries;
        self.query_failures += stats.query_failures;
        self.records_emitted += stats.records_emitted;
    }

    pub fn absorb_persistence(&mut self, stats: &PersistenceStats) {
        self.records_persisted += stats.persisted;
        self.insert_failures += stats.failed;
    }

    /// Every emitted record reached a sink, successfully or not.
    pub fn is_drained(&self) -> bool {
        self.records_emitted == self.records_persisted + self.insert_failures
    }

    pub fn log_summary(&self) {
        info!(
            domains_read = self.domains_read,
            domains_resolved = self.domains_resolved,
            gatekeeper_skips = self.gatekeeper_skips,
            queries = self.queries,
            query_failures = self.query_failures,
            records_emitted = self.records_emitted,
            records_persisted = self.records_persisted,
            insert_failures = self.insert_failures,
            elapsed_ms = self.elapsed.as_millis() as u64,
            "Enumeration finished"
        );

        if let Some(e) = &self.source_error {
            warn!(error = %e, "Domain source ended with an error; remaining domains were not read");
        }
        if self.worker_panics > 0 {
            warn!(worker_panics = self.worker_panics, "Some workers terminated abnormally");
        }
    }
}
