use crate::ports::outbound::storage::{Storage, StorageError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Process-local storage. Clones share the same entries.
#[derive(Clone, Default)]
pub struct InMemory {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemory {
    fn get(&self, key: String) -> Option<String> {
        match self.entries.lock() {
            Ok(entries) => entries.get(&key).cloned(),
            Err(why) => {
                log::warn!("Error reading {key} from memory {why:?}");
                None
            }
        }
    }

    fn set(&self, key: String, value: String) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|why| StorageError::new(format!("Poisoned storage lock: {why}")))?
            .insert(key, value);
        Ok(())
    }

    fn delete(&self, key: String) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|why| StorageError::new(format!("Poisoned storage lock: {why}")))?
            .remove(&key);
        Ok(())
    }
}
