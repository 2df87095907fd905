pub mod config;
pub mod event_store;
pub mod kv;

pub use config::{Config, ConfigError, StorageConfig};
pub use event_store::{DEFAULT_STORAGE_KEY, EventStore, StoreError};
pub use kv::{KeyValueStore, KvError, MemoryStore, SqliteStore};

/// Opens the configured event store. `ephemeral` keeps everything in memory.
pub fn open_event_store(config: &StorageConfig, ephemeral: bool) -> Result<EventStore, KvError> {
    let backend: Box<dyn KeyValueStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(SqliteStore::open(&config.database_path)?)
    };
    Ok(EventStore::load(backend, config.key.clone()))
}
