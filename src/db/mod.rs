mod models;
mod student_repository;

use crate::config::DatabaseConfig;
use crate::errors::Error;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::RunQueryDsl;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub use models::*;
pub use student_repository::*;

/// Statement used to bootstrap a fresh database file
pub const CREATE_STUDENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    age INTEGER NOT NULL
)";

/// Applies per-connection SQLite settings whenever the pool opens a connection
#[derive(Debug)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        diesel::sql_query(format!(
            "PRAGMA busy_timeout = {}",
            self.busy_timeout.as_millis()
        ))
        .execute(conn)
        .map_err(diesel::r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// Bounded pool of SQLite connections shared by every request
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    /// Builds the pool described by `config`
    ///
    /// Checkouts beyond `pool_size` wait up to `connection_timeout` for a
    /// connection to be returned.
    pub fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        let manager = ConnectionManager::<SqliteConnection>::new(&config.url);
        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(SqlitePragmas {
                busy_timeout: config.busy_timeout,
            }))
            .build(manager)?;

        info!(
            "Database pool ready for {} (max {} connections)",
            config.url, config.pool_size
        );
        Ok(Database {
            pool: Arc::new(pool),
        })
    }

    /// Checks out a connection, waiting for one to free up if the pool is exhausted
    pub fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, Error> {
        Ok(self.pool.get()?)
    }

    /// Creates the `students` table when it does not exist yet
    pub fn ensure_schema(&self) -> Result<(), Error> {
        let mut conn = self.get_conn()?;
        diesel::sql_query(CREATE_STUDENTS_TABLE).execute(&mut *conn)?;
        debug!("students table present");
        Ok(())
    }

    /// Runs `f` against a pooled connection on the blocking thread pool
    ///
    /// The connection goes back to the pool when `f` returns, whether it
    /// succeeded or not.
    pub async fn run<F, T>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut StudentRepository<'_>) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let mut repo = StudentRepository::new(&mut conn);
            f(&mut repo)
        })
        .await?
    }
}
