use diesel::connection::SimpleConnection;
use diesel::result::{DatabaseErrorKind, Error as DieselError, QueryResult};
use diesel::{Connection, SqliteConnection};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::repositories::RepositoryError;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(#[from] diesel::ConnectionError),
    #[error("Query error: {0}")]
    QueryError(#[from] DieselError),
}

/// Tables are created on first start; there is no schema versioning.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        name TEXT,
        password TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL
    );
    CREATE TABLE IF NOT EXISTS messages (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL,
        message TEXT NOT NULL,
        response TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL
    );
    CREATE TABLE IF NOT EXISTS documents (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL,
        filename TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL
    );
";

const CONNECTION_PRAGMAS: &str = "PRAGMA busy_timeout = 5000;";

/// Handle to the SQLite file. Cloning is cheap; every operation opens and
/// drops its own connection.
#[derive(Debug, Clone)]
pub struct Database {
    database_url: Arc<str>,
}

impl Database {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: Arc::from(database_url.into()),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn establish(&self) -> Result<SqliteConnection, DatabaseError> {
        let mut conn = SqliteConnection::establish(&self.database_url)?;
        conn.batch_execute(CONNECTION_PRAGMAS)?;
        Ok(conn)
    }

    /// Creates the file and its tables when missing, otherwise opens it.
    pub fn initialize(&self) -> Result<(), DatabaseError> {
        let existed = Path::new(self.database_url()).exists();

        let mut conn = self.establish()?;
        conn.batch_execute(SCHEMA)?;

        if existed {
            tracing::info!("Opened existing database at {}", self.database_url);
        } else {
            tracing::info!("Created database at {}", self.database_url);
        }
        Ok(())
    }

    /// Runs `operation` on a fresh connection on the blocking pool.
    pub async fn run<T, F>(&self, operation: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = database
                .establish()
                .map_err(|e| RepositoryError::Database(e.to_string()))?;
            operation(&mut conn).map_err(map_query_error)
        })
        .await
        .map_err(|e| RepositoryError::Database(format!("Task join error: {}", e)))?
    }
}

fn map_query_error(error: DieselError) -> RepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::UniqueViolation(info.message().to_string())
        }
        other => RepositoryError::Database(other.to_string()),
    }
}

#[cfg(test)]
pub(crate) fn temp_database() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let database = Database::new(path.to_string_lossy().to_string());
    database.initialize().unwrap();
    (dir, database)
}
