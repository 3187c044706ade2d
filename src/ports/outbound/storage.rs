use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
#[error("Error in storage operation: {0}")]
pub struct StorageError(String);

impl StorageError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Flat string key-value store used for the durable collection state.
///
/// Calls are synchronous; callers treat failures as best effort.
#[cfg_attr(test, automock)]
pub trait Storage {
    fn get(&self, key: String) -> Option<String>;
    fn set(&self, key: String, value: String) -> Result<(), StorageError>;
    fn delete(&self, key: String) -> Result<(), StorageError>;
}
