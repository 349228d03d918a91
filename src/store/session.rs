//! Store handle and request-scoped sessions

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyPool};

use super::errors::StoreResult;
use super::record::{Appointment, NewAppointment};
use super::schema::{create_schema, TABLE_NAME};
use super::url::DatabaseUrl;

/// Explicitly constructed store shared by all request handlers.
///
/// Cloning is cheap; every clone refers to the same pool.
#[derive(Clone)]
pub struct AppointmentStore {
    pool: AnyPool,
    url: DatabaseUrl,
}

impl AppointmentStore {
    /// Connect to the database named by `url`. Does not create the schema.
    pub async fn open(url: &DatabaseUrl) -> StoreResult<Self> {
        install_default_drivers();

        let options = match url {
            // Each SQLite memory connection is its own database, so keep
            // exactly one alive for the life of the store.
            DatabaseUrl::Memory => AnyPoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
            _ => AnyPoolOptions::new(),
        };
        let pool = options.connect(&url.connect_url()).await?;

        Ok(Self {
            pool,
            url: url.clone(),
        })
    }

    /// Private in-memory store with the schema already created
    pub async fn in_memory() -> StoreResult<Self> {
        let store = Self::open(&DatabaseUrl::Memory).await?;
        store.create_schema().await?;
        Ok(store)
    }

    pub fn url(&self) -> &DatabaseUrl {
        &self.url
    }

    /// Idempotent schema creation
    pub async fn create_schema(&self) -> StoreResult<()> {
        let mut session = self.session().await?;
        create_schema(&mut session.conn, self.url.dialect()).await
    }

    /// Acquire a connection for one request.
    ///
    /// The connection goes back to the pool when the session is dropped,
    /// whether the request finished, failed, was cancelled or panicked.
    pub async fn session(&self) -> StoreResult<Session> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }
}

/// Request-scoped access to the appointment table
pub struct Session {
    conn: PoolConnection<Any>,
}

impl Session {
    /// All stored appointments, ordered by id
    pub async fn list_all(&mut self) -> StoreResult<Vec<Appointment>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            Appointment::COLUMNS,
            TABLE_NAME
        );
        let appointments = sqlx::query_as::<_, Appointment>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(appointments)
    }

    /// Persist a new appointment and return it with its assigned id
    pub async fn insert(&mut self, fields: NewAppointment) -> StoreResult<Appointment> {
        let sql = format!(
            "INSERT INTO {} (name_notari, sala, date_date, descripcio) \
             VALUES ($1, $2, $3, $4) RETURNING id",
            TABLE_NAME
        );
        let id = sqlx::query_scalar::<_, i64>(&sql)
            .bind(fields.name_notari.as_str())
            .bind(fields.sala.as_str())
            .bind(fields.date_date.as_str())
            .bind(fields.descripcio.as_str())
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(fields.with_id(id))
    }

    pub async fn find_by_id(&mut self, id: i64) -> StoreResult<Option<Appointment>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            Appointment::COLUMNS,
            TABLE_NAME
        );
        let appointment = sqlx::query_as::<_, Appointment>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(appointment)
    }

    /// Remove one appointment. Returns false when no row had this id.
    pub async fn delete(&mut self, id: i64) -> StoreResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", TABLE_NAME);
        let result = sqlx::query(&sql).bind(id).execute(&mut *self.conn).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn smith() -> NewAppointment {
        NewAppointment::new("Smith", "A1", "2024-01-01", "signing")
    }

    async fn file_store(dir: &TempDir) -> AppointmentStore {
        let url = DatabaseUrl::File(dir.path().join("appointments.db"));
        let store = AppointmentStore::open(&url).await.unwrap();
        store.create_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_insert_assigns_first_id() {
        let store = AppointmentStore::in_memory().await.unwrap();
        let mut session = store.session().await.unwrap();
        let stored = session.insert(smith()).await.unwrap();
        assert_eq!(stored, smith().with_id(1));
    }

    #[tokio::test]
    async fn test_insert_ids_are_unique() {
        let store = AppointmentStore::in_memory().await.unwrap();
        let mut session = store.session().await.unwrap();
        let a = session.insert(smith()).await.unwrap();
        let b = session.insert(smith()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let store = AppointmentStore::in_memory().await.unwrap();
        let mut session = store.session().await.unwrap();
        assert!(session.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_all_inserted() {
        let store = AppointmentStore::in_memory().await.unwrap();
        let mut session = store.session().await.unwrap();
        let mut inserted = Vec::new();
        for i in 0..3 {
            let fields = NewAppointment::new(format!("N{i}"), "B2", "2024-02-02", "x");
            inserted.push(session.insert(fields).await.unwrap());
        }
        assert_eq!(session.list_all().await.unwrap(), inserted);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = AppointmentStore::in_memory().await.unwrap();
        let mut session = store.session().await.unwrap();
        let stored = session.insert(smith()).await.unwrap();
        assert_eq!(session.find_by_id(stored.id).await.unwrap(), Some(stored));
        assert_eq!(session.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = AppointmentStore::in_memory().await.unwrap();
        let mut session = store.session().await.unwrap();
        let keep = session.insert(smith()).await.unwrap();
        let gone = session.insert(smith()).await.unwrap();

        assert!(session.delete(gone.id).await.unwrap());
        assert_eq!(session.list_all().await.unwrap(), vec![keep]);
        assert!(!session.delete(gone.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_deleted_id_not_reused() {
        let store = AppointmentStore::in_memory().await.unwrap();
        let mut session = store.session().await.unwrap();
        let first = session.insert(smith()).await.unwrap();
        session.delete(first.id).await.unwrap();
        let second = session.insert(smith()).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let store = AppointmentStore::in_memory().await.unwrap();
        store.create_schema().await.unwrap();

        let mut session = store.session().await.unwrap();
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' \
             AND name = 'ix_appointments_name_notari'",
        )
        .fetch_one(&mut *session.conn)
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_memory_store_survives_sequential_sessions() {
        let store = AppointmentStore::in_memory().await.unwrap();
        {
            let mut session = store.session().await.unwrap();
            session.insert(smith()).await.unwrap();
        }
        let mut session = store.session().await.unwrap();
        assert_eq!(session.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_session_released_after_failed_statement() {
        let store = AppointmentStore::open(&DatabaseUrl::Memory).await.unwrap();
        {
            // No schema yet, so the statement fails.
            let mut session = store.session().await.unwrap();
            assert!(session.list_all().await.is_err());
        }
        assert!(store.session().await.is_ok());
    }

    #[tokio::test]
    async fn test_store_usable_after_session_panics() {
        let dir = TempDir::new().unwrap();
        let store = file_store(&dir).await;

        let held = store.clone();
        let outcome = tokio::spawn(async move {
            let mut session = held.session().await.unwrap();
            session.insert(smith()).await.unwrap();
            panic!("handler failed while holding a session");
        })
        .await;
        assert!(outcome.unwrap_err().is_panic());

        let mut session = store.session().await.unwrap();
        let listed = session.list_all().await.unwrap();
        assert_eq!(listed, vec![smith().with_id(1)]);
        session.insert(smith()).await.unwrap();
    }
}
