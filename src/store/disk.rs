//! Persistent [`BoardStore`] on an embedded redb database.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableTable, TableDefinition};

use super::{BoardStore, StoreError};

/// Key -> serialized board JSON.
const BOARDS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("boards");

/// Board store persisted to a single redb file.
///
/// redb transactions block, so every operation runs on the blocking pool.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Create or open a store at the given path.
    ///
    /// Creates the parent directory, the database file and the boards table
    /// if they don't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::create(path).map_err(redb::Error::from)?;

        let write_txn = db.begin_write().map_err(redb::Error::from)?;
        {
            write_txn
                .open_table(BOARDS_TABLE)
                .map_err(redb::Error::from)?;
        }
        write_txn.commit().map_err(redb::Error::from)?;

        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl BoardStore for RedbStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        tokio::task::spawn_blocking(move || -> Result<Option<String>, StoreError> {
            let read_txn = db.begin_read().map_err(redb::Error::from)?;
            let table = read_txn
                .open_table(BOARDS_TABLE)
                .map_err(redb::Error::from)?;

            let value = table
                .get(key.as_str())
                .map_err(redb::Error::from)?
                .map(|guard| guard.value().to_string());
            Ok(value)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            let write_txn = db.begin_write().map_err(redb::Error::from)?;
            {
                let mut table = write_txn
                    .open_table(BOARDS_TABLE)
                    .map_err(redb::Error::from)?;
                table
                    .insert(key.as_str(), value.as_str())
                    .map_err(redb::Error::from)?;
            }
            write_txn.commit().map_err(redb::Error::from)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}
