use async_trait::async_trait;
use ferrous_census_domain::{Answer, DomainError, RecordType};

#[async_trait]
pub trait RecordResolver: Send + Sync {
    /// Queries the upstream resolver for one `(domain, record_type)` pair.
    ///
    /// Returns every record of the answer section. A response without
    /// answers (NODATA, NXDOMAIN) is `Ok(vec![])`; transport failures,
    /// timeouts and server errors are `Err`.
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<Answer>, DomainError>;
}
