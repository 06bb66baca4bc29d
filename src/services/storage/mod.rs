pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Failures of a key-value storage area.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("stored value is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// String key-value storage partitioned into isolated areas, one per client.
pub trait Storage: Send + Sync {
    fn get_item(&self, area: &str, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, area: &str, key: &str, value: &str) -> Result<(), StorageError>;
}
