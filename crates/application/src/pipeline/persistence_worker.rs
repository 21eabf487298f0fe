use crate::ports::RecordSink;
use async_channel::Receiver;
use ferrous_census_domain::CanonicalRecord;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Counters reported by one persistence worker when it exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistenceStats {
    pub persisted: u64,
    pub failed: u64,
}

/// Drains the output queue into its own sink handle. A failed insert is
/// logged and dropped; the worker moves on to the next record.
pub struct PersistenceWorker {
    id: usize,
    sink: Box<dyn RecordSink>,
    records: Receiver<CanonicalRecord>,
}

impl PersistenceWorker {
    pub fn new(id: usize, sink: Box<dyn RecordSink>, records: Receiver<CanonicalRecord>) -> Self {
        Self { id, sink, records }
    }

    pub fn spawn(self) -> JoinHandle<PersistenceStats> {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self) -> PersistenceStats {
        let mut stats = PersistenceStats::default();
        debug!(worker = self.id, "Persistence worker started");

        while let Ok(record) = self.records.recv().await {
            match self.sink.insert(&record).await {
                Ok(()) => stats.persisted += 1,
                Err(e) => {
                    stats.failed += 1;
                    warn!(
                        error = %e,
                        worker = self.id,
                        domain = %record.domain(),
                        record_type = %record.record_type(),
                        value = %record.value(),
                        "Failed to persist record (dropped)"
                    );
                }
            }
        }

        if let Err(e) = self.sink.close().await {
            warn!(error = %e, worker = self.id, "Failed to close record sink");
        }

        debug!(
            worker = self.id,
            persisted = stats.persisted,
            failed = stats.failed,
            "Persistence worker finished"
        );
        stats
    }
}
