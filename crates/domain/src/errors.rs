use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Upstream server failure: {0}")]
    ServerFailure(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Domain source error: {0}")]
    SourceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn transport(server: impl ToString, reason: impl ToString) -> Self {
        Self::Transport {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }
}
