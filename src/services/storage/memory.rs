use std::collections::HashMap;
use std::sync::Mutex;

use super::{Storage, StorageError};

#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<(String, String), String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, area: &str, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .lock()
            .map_err(|_| StorageError::Backend("memory storage lock poisoned".to_string()))?;
        Ok(items.get(&(area.to_string(), key.to_string())).cloned())
    }

    fn set_item(&self, area: &str, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| StorageError::Backend("memory storage lock poisoned".to_string()))?;
        items.insert((area.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
