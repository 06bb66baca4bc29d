use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use super::{Storage, StorageError};
use crate::db::queries;

pub struct SqliteStorage {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, area: &str, key: &str) -> Result<Option<String>, StorageError> {
        let db = self
            .db
            .lock()
            .map_err(|_| StorageError::Backend("database lock poisoned".to_string()))?;
        queries::get_item(&db, area, key).map_err(|e| StorageError::Backend(e.to_string()))
    }

    fn set_item(&self, area: &str, key: &str, value: &str) -> Result<(), StorageError> {
        let db = self
            .db
            .lock()
            .map_err(|_| StorageError::Backend("database lock poisoned".to_string()))?;
        queries::set_item(&db, area, key, value).map_err(|e| StorageError::Backend(e.to_string()))
    }
}
