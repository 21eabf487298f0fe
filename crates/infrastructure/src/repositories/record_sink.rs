use crate::database::{self, INSERT_RECORD};
use async_trait::async_trait;
use ferrous_census_application::ports::{RecordSink, RecordSinkFactory};
use ferrous_census_domain::{CanonicalRecord, DatabaseConfig, DomainError};
use sqlx::AnyConnection;
use sqlx::Connection;
use tracing::{debug, info};

/// Opens one dedicated database connection per persistence worker.
pub struct SqlRecordSinkFactory {
    database_url: String,
}

impl SqlRecordSinkFactory {
    /// Checks that the database is reachable and, when asked, creates the
    /// records table. Fails fast so a bad URL stops the run before any
    /// worker starts.
    pub async fn prepare(database_url: &str, create_table: bool) -> Result<Self, DomainError> {
        let mut conn = database::connect(database_url)
            .await
            .map_err(|e| DomainError::DatabaseError(format!("connect failed: {}", e)))?;

        if create_table {
            database::ensure_schema(&mut conn)
                .await
                .map_err(|e| DomainError::DatabaseError(format!("create table failed: {}", e)))?;
            info!("dns_records table ready");
        }

        conn.close()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(Self {
            database_url: database_url.to_string(),
        })
    }

    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DomainError> {
        Self::prepare(&config.connection_url(), config.create_table).await
    }
}

#[async_trait]
impl RecordSinkFactory for SqlRecordSinkFactory {
    async fn open(&self) -> Result<Box<dyn RecordSink>, DomainError> {
        let conn = database::connect(&self.database_url)
            .await
            .map_err(|e| DomainError::DatabaseError(format!("connect failed: {}", e)))?;
        debug!("Record sink connection opened");
        Ok(Box::new(SqlRecordSink { conn }))
    }
}

pub struct SqlRecordSink {
    conn: AnyConnection,
}

#[async_trait]
impl RecordSink for SqlRecordSink {
    async fn insert(&mut self, record: &CanonicalRecord) -> Result<(), DomainError> {
        sqlx::query(INSERT_RECORD)
            .bind(record.domain())
            .bind(record.record_type().to_string())
            .bind(record.value())
            .bind(record.ip_encoding().to_string())
            .execute(&mut self.conn)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), DomainError> {
        self.conn
            .close()
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }
}
