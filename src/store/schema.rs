//! Table definition for appointments
//!
//! Schema creation is idempotent ("create if not exists"). There is no
//! migration versioning: an existing table is used as-is.

use sqlx::AnyConnection;

use super::errors::StoreResult;
use super::url::Dialect;

/// Name of the appointment table
pub(crate) const TABLE_NAME: &str = "appointments";

/// Identity column per dialect. Neither hands out an id twice, even after
/// the newest row is deleted.
fn id_column(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Postgres => "BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY",
        Dialect::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
    }
}

/// DDL statements, one per entry
pub(crate) fn schema_statements(dialect: Dialect) -> [String; 2] {
    [
        format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id          {id},
                name_notari TEXT NOT NULL,
                sala        TEXT NOT NULL,
                date_date   TEXT NOT NULL,
                descripcio  TEXT NOT NULL
            )",
            table = TABLE_NAME,
            id = id_column(dialect),
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS ix_{table}_name_notari ON {table} (name_notari)",
            table = TABLE_NAME,
        ),
    ]
}

/// Create the appointment table and its index if they are absent
pub(crate) async fn create_schema(conn: &mut AnyConnection, dialect: Dialect) -> StoreResult<()> {
    for statement in schema_statements(dialect) {
        sqlx::query(&statement).execute(&mut *conn).await?;
    }
    Ok(())
}
