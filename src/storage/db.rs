use anyhow::Result;
use log::debug;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    Schema,
};
use std::path::PathBuf;

use crate::config::DatabaseConfig;
use crate::entities::{member, team};

/// Failures while opening or bootstrapping the roster database.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Local storage manager for the roster database.
pub struct Storage {
    pub(crate) conn: DatabaseConnection,
}

impl Storage {
    /// Open (and bootstrap) a roster database at the given connection URL.
    pub async fn open(database_url: &str) -> Result<Self, StorageError> {
        Self::connect(ConnectOptions::new(database_url)).await
    }

    /// Open a throwaway in-memory roster database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        // A single connection: pooled siblings would each get their own
        // empty in-memory database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        Self::connect(options).await
    }

    /// Open the database described by the configuration, creating the
    /// data directory for file-backed stores when needed.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, StorageError> {
        if config.in_memory {
            return Self::in_memory().await;
        }

        let path = config.resolved_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::DataDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        Self::open(&format!("sqlite://{}?mode=rwc", path.display())).await
    }

    async fn connect(options: ConnectOptions) -> Result<Self, StorageError> {
        debug!("opening roster database at {}", options.get_url());
        let conn = Database::connect(options).await?;

        let storage = Storage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create the schema from the entity definitions.
    async fn init_schema(&self) -> Result<(), StorageError> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        // Teams first: members carry the foreign key.
        let mut teams = schema.create_table_from_entity(team::Entity);
        self.conn.execute(backend.build(teams.if_not_exists())).await?;

        let mut members = schema.create_table_from_entity(member::Entity);
        self.conn.execute(backend.build(members.if_not_exists())).await?;

        Ok(())
    }

    /// Borrow the underlying connection for ad-hoc queries and the
    /// repository layer.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Check if the database has any data.
    pub async fn has_data(&self) -> Result<bool> {
        let teams = team::Entity::find().count(&self.conn).await?;
        if teams > 0 {
            return Ok(true);
        }
        let members = member::Entity::find().count(&self.conn).await?;
        Ok(members > 0)
    }

    /// Clear all data from the database.
    pub async fn clear_all_data(&self) -> Result<()> {
        member::Entity::delete_many().exec(&self.conn).await?;
        team::Entity::delete_many().exec(&self.conn).await?;
        Ok(())
    }
}
