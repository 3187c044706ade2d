pub mod file_system;
pub mod in_memory;
pub mod redis;

use crate::adapters::outbound::storage::file_system::FileSystem;
use crate::adapters::outbound::storage::in_memory::InMemory;
use crate::adapters::outbound::storage::redis::Redis;
use crate::config::StorageConfig;
use crate::ports::outbound::storage::{Storage, StorageError};

/// Storage backend picked at startup from configuration.
pub enum Backend {
    InMemory(InMemory),
    FileSystem(FileSystem),
    Redis(Redis),
}

impl Storage for Backend {
    fn get(&self, key: String) -> Option<String> {
        match self {
            Backend::InMemory(storage) => storage.get(key),
            Backend::FileSystem(storage) => storage.get(key),
            Backend::Redis(storage) => storage.get(key),
        }
    }

    fn set(&self, key: String, value: String) -> Result<(), StorageError> {
        match self {
            Backend::InMemory(storage) => storage.set(key, value),
            Backend::FileSystem(storage) => storage.set(key, value),
            Backend::Redis(storage) => storage.set(key, value),
        }
    }

    fn delete(&self, key: String) -> Result<(), StorageError> {
        match self {
            Backend::InMemory(storage) => storage.delete(key),
            Backend::FileSystem(storage) => storage.delete(key),
            Backend::Redis(storage) => storage.delete(key),
        }
    }
}

pub fn init_storage(config: &StorageConfig) -> Result<Backend, StorageError> {
    let backend = match config {
        StorageConfig::InMemory => Backend::InMemory(InMemory::new()),
        StorageConfig::FileSystem(dir) => Backend::FileSystem(FileSystem::new(dir.clone())),
        StorageConfig::Redis(url) => Backend::Redis(Redis::open(url)?),
    };

    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_in_memory() {
        let storage = init_storage(&StorageConfig::InMemory).unwrap();
        storage.set(String::from("k"), String::from("v")).unwrap();
        assert!(matches!(storage, Backend::InMemory(_)));
        assert_eq!(storage.get(String::from("k")), Some(String::from("v")));
    }

    #[test]
    fn test_init_file_system() {
        let dir = tempdir().unwrap();
        let storage = init_storage(&StorageConfig::FileSystem(dir.path().to_path_buf())).unwrap();

        storage.set(String::from("k"), String::from("v")).unwrap();

        assert!(dir.path().join("k.json").is_file());
        storage.delete(String::from("k")).unwrap();
        assert!(storage.get(String::from("k")).is_none());
    }

    #[test]
    fn test_init_redis_with_bad_url() {
        assert!(init_storage(&StorageConfig::Redis(String::from("nope"))).is_err());
    }
}
