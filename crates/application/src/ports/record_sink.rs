use async_trait::async_trait;
use ferrous_census_domain::{CanonicalRecord, DomainError};

/// One exclusive write handle to the record store.
#[async_trait]
pub trait RecordSink: Send {
    async fn insert(&mut self, record: &CanonicalRecord) -> Result<(), DomainError>;

    async fn close(self: Box<Self>) -> Result<(), DomainError>;
}

/// Opens independent sink handles, one per persistence worker.
#[async_trait]
pub trait RecordSinkFactory: Send + Sync {
    async fn open(&self) -> Result<Box<dyn RecordSink>, DomainError>;
}
