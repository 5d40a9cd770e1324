use log::{debug, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;

use crate::entities;
use crate::error::{StoreError, StoreResult};

/// SQLite-backed mood journal
pub struct JournalStore {
    pub(crate) db: DatabaseConnection,
}

impl JournalStore {
    /// Connect to any SQLite URL understood by SeaORM and migrate the schema.
    ///
    /// A single pooled connection is used so `sqlite::memory:` databases
    /// survive for the lifetime of the store.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let mut options = ConnectOptions::new(database_url.to_string());
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(options).await?;
        let store = Self { db };
        store.migrate().await?;

        debug!("Storage: connected to {}", database_url);
        Ok(store)
    }

    /// Open an existing journal, failing when it was never initialized.
    pub async fn open(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::NotInitialized(path.to_path_buf()));
        }

        Self::connect(&sqlite_url(path, "rw")).await
    }

    /// Create a journal at `path`, creating parent directories as needed.
    ///
    /// An existing journal is only replaced when `force` is set.
    pub async fn init(path: &Path, force: bool) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if path.exists() {
            if !force {
                return Err(StoreError::AlreadyInitialized(path.to_path_buf()));
            }
            info!("Storage: truncating existing journal at {}", path.display());
            std::fs::File::create(path)?;
        }

        Self::connect(&sqlite_url(path, "rwc")).await
    }

    /// Create the entries table when missing
    async fn migrate(&self) -> StoreResult<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut statement = schema.create_table_from_entity(entities::Entry);
        statement.if_not_exists();
        self.db.execute(backend.build(&statement)).await?;

        Ok(())
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn sqlite_url(path: &Path, mode: &str) -> String {
    format!("sqlite://{}?mode={}", path.display(), mode)
}
