use async_trait::async_trait;
use ferrous_census_domain::DomainError;

/// Forward-only stream of raw domain lines.
#[async_trait]
pub trait DomainSource: Send {
    /// `Ok(None)` once the source is exhausted. An error ends the stream.
    async fn next_domain(&mut self) -> Result<Option<String>, DomainError>;
}
