use crate::ports::RecordResolver;
use async_channel::{Receiver, Sender};
use ferrous_census_domain::{Answer, CanonicalRecord, RecordType};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Counters reported by one resolution worker when it exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    pub domains: u64,
    pub gatekeeper_skips: u64,
    pub queries: u64,
    pub query_failures: u64,
    pub records_emitted: u64,
}

enum DomainOutcome {
    Completed,
    NoDelegation,
    OutputClosed,
}

/// Pulls domains off the input queue and pushes one [`CanonicalRecord`]
/// per answer onto the output queue.
pub struct ResolutionWorker {
    id: usize,
    resolver: Arc<dyn RecordResolver>,
    domains: Receiver<Arc<str>>,
    records: Sender<CanonicalRecord>,
    query_timeout: Duration,
}

impl ResolutionWorker {
    pub fn new(
        id: usize,
        resolver: Arc<dyn RecordResolver>,
        domains: Receiver<Arc<str>>,
        records: Sender<CanonicalRecord>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            id,
            resolver,
            domains,
            records,
            query_timeout,
        }
    }

    pub fn spawn(self) -> JoinHandle<ResolutionStats> {
        tokio::spawn(self.run())
    }

    /// Runs until the input queue is closed and empty, or until the output
    /// queue is closed underneath it.
    pub async fn run(self) -> ResolutionStats {
        let mut stats = ResolutionStats::default();
        debug!(worker = self.id, "Resolution worker started");

        while let Ok(domain) = self.domains.recv().await {
            stats.domains += 1;

            match self.resolve_domain(&domain, &mut stats).await {
                DomainOutcome::Completed => {}
                DomainOutcome::NoDelegation => stats.gatekeeper_skips += 1,
                DomainOutcome::OutputClosed => {
                    warn!(
                        worker = self.id,
                        domain = %domain,
                        "Output queue closed, resolution worker stopping early"
                    );
                    break;
                }
            }
        }

        debug!(
            worker = self.id,
            domains = stats.domains,
            queries = stats.queries,
            records = stats.records_emitted,
            "Resolution worker finished"
        );
        stats
    }

    async fn resolve_domain(&self, domain: &Arc<str>, stats: &mut ResolutionStats) -> DomainOutcome {
        for record_type in RecordType::QUERY_ORDER {
            let answers = self.query(domain, record_type, stats).await;

            if answers.is_empty() && record_type.is_gatekeeper() {
                debug!(
                    domain = %domain,
                    record_type = %record_type,
                    "No delegation, skipping remaining record types"
                );
                return DomainOutcome::NoDelegation;
            }

            for answer in &answers {
                let record = CanonicalRecord::from_answer(Arc::clone(domain), answer);
                debug!(
                    domain = %domain,
                    queried = %record_type,
                    record_type = %record.record_type(),
                    value = %record.value(),
                    "Record extracted"
                );

                if self.records.send(record).await.is_err() {
                    return DomainOutcome::OutputClosed;
                }
                stats.records_emitted += 1;
            }
        }

        DomainOutcome::Completed
    }

    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        stats: &mut ResolutionStats,
    ) -> Vec<Answer> {
        stats.queries += 1;

        // Backstop for resolvers that ignore their own deadline.
        match tokio::time::timeout(self.query_timeout, self.resolver.resolve(domain, record_type))
            .await
        {
            Ok(Ok(answers)) => answers,
            Ok(Err(e)) => {
                stats.query_failures += 1;
                warn!(
                    error = %e,
                    domain = %domain,
                    record_type = %record_type,
                    "DNS query failed, treating as no answers"
                );
                Vec::new()
            }
            Err(_) => {
                stats.query_failures += 1;
                warn!(
                    domain = %domain,
                    record_type = %record_type,
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "DNS query timed out, treating as no answers"
                );
                Vec::new()
            }
        }
    }
}
