use sqlx::AnyConnection;
use sqlx::Connection;

/// One row per extracted answer. `ip_dec` holds the decimal IP encoding,
/// which can exceed 64 bits for IPv6 and is therefore stored as text.
pub const CREATE_RECORDS_TABLE: &str = "CREATE TABLE IF NOT EXISTS dns_records (\
    domain VARCHAR(255) NOT NULL, \
    type VARCHAR(16) NOT NULL, \
    value TEXT NOT NULL, \
    ip_dec VARCHAR(39) NOT NULL)";

pub const INSERT_RECORD: &str =
    "INSERT INTO dns_records (domain, type, value, ip_dec) VALUES (?, ?, ?, ?)";

/// Opens a single connection for any supported URL scheme (`mysql://`, `sqlite:`).
pub async fn connect(database_url: &str) -> Result<AnyConnection, sqlx::Error> {
    sqlx::any::install_default_drivers();
    AnyConnection::connect(database_url).await
}

pub async fn ensure_schema(conn: &mut AnyConnection) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_RECORDS_TABLE).execute(conn).await?;
    Ok(())
}
