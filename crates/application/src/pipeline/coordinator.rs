use super::{
    PersistenceWorker, PipelineReport, PipelineSettings, PipelineState, ResolutionWorker,
};
use crate::ports::{DomainSource, RecordResolver, RecordSink, RecordSinkFactory};
use async_channel::Sender;
use ferrous_census_domain::{CanonicalRecord, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Owns the two bounded queues and both worker pools for one run.
///
/// Shutdown is driven by completion, never by timers: the input queue closes
/// when the source is exhausted, the output queue closes once every
/// resolution worker has been joined, and `run` returns once every
/// persistence worker has been joined.
pub struct PipelineCoordinator {
    settings: PipelineSettings,
    resolver: Arc<dyn RecordResolver>,
    sinks: Arc<dyn RecordSinkFactory>,
    state: watch::Sender<PipelineState>,
}

impl PipelineCoordinator {
    pub fn new(
        settings: PipelineSettings,
        resolver: Arc<dyn RecordResolver>,
        sinks: Arc<dyn RecordSinkFactory>,
    ) -> Self {
        let (state, _) = watch::channel(PipelineState::Starting);
        Self {
            settings,
            resolver,
            sinks,
            state,
        }
    }

    pub fn state(&self) -> PipelineState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    /// Runs the pipeline to completion over `source`.
    ///
    /// Fails only when a sink cannot be opened at startup. Per-query and
    /// per-insert failures are logged and counted in the report; a source
    /// error stops intake, drains what was already queued and is returned
    /// in [`PipelineReport::source_error`].
    pub async fn run(&self, source: &mut dyn DomainSource) -> Result<PipelineReport, DomainError> {
        let started = Instant::now();
        self.transition(PipelineState::Starting);

        let sinks = match self.open_sinks().await {
            Ok(sinks) => sinks,
            Err(e) => {
                self.transition(PipelineState::Stopped);
                return Err(e);
            }
        };

        let (domain_tx, domain_rx) =
            async_channel::bounded::<Arc<str>>(self.settings.input_queue_capacity);
        let (record_tx, record_rx) =
            async_channel::bounded::<CanonicalRecord>(self.settings.output_queue_capacity);

        let persisters: Vec<_> = sinks
            .into_iter()
            .enumerate()
            .map(|(id, sink)| PersistenceWorker::new(id, sink, record_rx.clone()).spawn())
            .collect();
        drop(record_rx);

        let resolvers: Vec<_> = (0..self.settings.resolution_workers)
            .map(|id| {
                ResolutionWorker::new(
                    id,
                    Arc::clone(&self.resolver),
                    domain_rx.clone(),
                    record_tx.clone(),
                    self.settings.query_timeout,
                )
                .spawn()
            })
            .collect();
        drop(domain_rx);

        info!(
            resolution_workers = resolvers.len(),
            persistence_workers = persisters.len(),
            input_queue_capacity = self.settings.input_queue_capacity,
            output_queue_capacity = self.settings.output_queue_capacity,
            "Worker pools started"
        );

        let mut report = PipelineReport::default();

        self.transition(PipelineState::Streaming);
        let (domains_read, source_error) = Self::stream_domains(source, &domain_tx).await;
        report.domains_read = domains_read;
        report.source_error = source_error;
        domain_tx.close();

        self.transition(PipelineState::DrainingResolution);
        for handle in resolvers {
            match handle.await {
                Ok(stats) => report.absorb_resolution(&stats),
                Err(e) => {
                    report.worker_panics += 1;
                    error!(error = %e, "Resolution worker terminated abnormally");
                }
            }
        }
        record_tx.close();

        self.transition(PipelineState::DrainingPersistence);
        for handle in persisters {
            match handle.await {
                Ok(stats) => report.absorb_persistence(&stats),
                Err(e) => {
                    report.worker_panics += 1;
                    error!(error = %e, "Persistence worker terminated abnormally");
                }
            }
        }

        report.elapsed = started.elapsed();
        self.transition(PipelineState::Stopped);
        Ok(report)
    }

    async fn open_sinks(&self) -> Result<Vec<Box<dyn RecordSink>>, DomainError> {
        let mut sinks = Vec::with_capacity(self.settings.persistence_workers);
        for id in 0..self.settings.persistence_workers {
            match self.sinks.open().await {
                Ok(sink) => sinks.push(sink),
                Err(e) => {
                    error!(error = %e, worker = id, "Failed to open record sink");
                    for sink in sinks {
                        let _ = sink.close().await;
                    }
                    return Err(e);
                }
            }
        }
        Ok(sinks)
    }

    /// Feeds non-blank lines from `source` into the input queue, blocking
    /// while the queue is full.
    async fn stream_domains(
        source: &mut dyn DomainSource,
        domains: &Sender<Arc<str>>,
    ) -> (u64, Option<DomainError>) {
        let mut read = 0u64;

        loop {
            match source.next_domain().await {
                Ok(Some(line)) => {
                    let domain = line.trim();
                    if domain.is_empty() {
                        continue;
                    }
                    if domains.send(Arc::from(domain)).await.is_err() {
                        let e = DomainError::SourceError(
                            "every resolution worker stopped before the source was drained"
                                .to_string(),
                        );
                        error!(error = %e, read, "Domain intake aborted");
                        return (read, Some(e));
                    }
                    read += 1;
                }
                Ok(None) => {
                    debug!(read, "Domain source exhausted");
                    return (read, None);
                }
                Err(e) => {
                    error!(error = %e, read, "Failed to read domain source");
                    return (read, Some(e));
                }
            }
        }
    }

    fn transition(&self, next: PipelineState) {
        let previous = self.state.send_replace(next);
        if previous != next {
            info!(from = %previous, to = %next, "Pipeline state changed");
        }
    }
}
