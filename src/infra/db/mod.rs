//! Database connection handle.

use std::sync::atomic::{AtomicBool, Ordering};

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::errors::{StoreError, StoreResult};

/// Owned handle to the SeaORM connection pool.
///
/// One handle per logical unit of work; concurrent in-flight operations on
/// the same handle must be serialized by the caller.
pub struct Store {
    connection: DatabaseConnection,
    closed: AtomicBool,
}

impl Store {
    /// Connect to the backing database.
    ///
    /// Accepts a URL or a full `ConnectOptions` for pool tuning.
    pub async fn connect<O>(options: O) -> StoreResult<Self>
    where
        O: Into<ConnectOptions> + Send,
    {
        let connection = Database::connect(options).await?;
        Ok(Self::new(connection))
    }

    /// Wrap an already established connection.
    pub fn new(connection: DatabaseConnection) -> Self {
        Self {
            connection,
            closed: AtomicBool::new(false),
        }
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// True once `close` has run.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> StoreResult<()> {
        if self.is_closed() {
            return Err(StoreError::Closed);
        }
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Release the connection pool.
    ///
    /// Idempotent: the first call closes the pool, later calls are no-ops.
    pub async fn close(&self) -> StoreResult<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.connection.clone().close().await?;
        Ok(())
    }
}
