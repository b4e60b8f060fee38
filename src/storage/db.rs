use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::config::Config;
use crate::entities;

/// Storage manager owning the database connection.
///
/// Repositories stay generic over `ConnectionTrait`; this type is the
/// concrete handle applications construct and inject.
pub struct Storage {
    conn: DatabaseConnection,
}

impl Storage {
    /// Connect using the configured database settings and bootstrap the
    /// schema if it is missing.
    pub async fn new(config: &Config) -> Result<Self> {
        let mut options = ConnectOptions::new(config.database.url.clone());
        options
            .max_connections(config.database.max_connections)
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;

        let storage = Storage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Open a private in-memory database, mainly for tests.
    pub async fn in_memory() -> Result<Self> {
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        // A single pinned connection keeps the in-memory database alive.
        options
            .min_connections(1)
            .max_connections(1)
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;

        let storage = Storage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// The connection handle repositories operate on.
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create the tables for all entities, parents before children.
    async fn init_schema(&self) -> Result<()> {
        log::debug!("initializing database schema");

        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut groups = schema.create_table_from_entity(entities::Group);
        self.conn.execute(backend.build(groups.if_not_exists())).await?;

        let mut releases = schema.create_table_from_entity(entities::Release);
        self.conn.execute(backend.build(releases.if_not_exists())).await?;

        Ok(())
    }
}
