use crate::ports::outbound::storage::{Storage, StorageError};
use redis::{Client, Commands, Connection, RedisResult};

pub struct Redis {
    client: Client,
}

impl Redis {
    pub fn open(url: &str) -> Result<Self, StorageError> {
        match Client::open(url) {
            Ok(client) => Ok(Self { client }),
            Err(why) => {
                log::warn!("Error opening redis client {why:?}");
                Err(StorageError::new(format!("Unable to open redis client: {why}")))
            }
        }
    }

    fn new_connection(&self) -> Result<Connection, StorageError> {
        match self.client.get_connection() {
            Ok(connection) => Ok(connection),
            Err(why) => {
                log::warn!("Error making connection {why:?}");
                Err(StorageError::new(String::from("Unable to get connection")))
            }
        }
    }
}

impl Storage for Redis {
    fn get(&self, key: String) -> Option<String> {
        let mut connection = self.new_connection().ok()?;
        let value: RedisResult<Option<String>> = connection.get(key);
        match value {
            Ok(value) => value,
            Err(why) => {
                log::warn!("Error getting value from redis {why:?}");
                None
            }
        }
    }

    fn set(&self, key: String, value: String) -> Result<(), StorageError> {
        let mut connection = self.new_connection()?;
        let result: RedisResult<()> = connection.set(key, value);
        if let Err(why) = result {
            log::warn!("Error setting value in redis {why:?}");
            Err(StorageError::new(String::from("Unable to set value")))
        } else {
            Ok(())
        }
    }

    fn delete(&self, key: String) -> Result<(), StorageError> {
        let mut connection = self.new_connection()?;
        let result: RedisResult<()> = connection.del(key);
        if let Err(why) = result {
            log::warn!("Error deleting value in redis {why:?}");
            Err(StorageError::new(String::from("Unable to delete value")))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_invalid_url() {
        assert!(Redis::open("not a redis url").is_err());
    }

    #[test]
    fn test_unreachable_server_degrades() {
        // Port 1 on loopback refuses connections.
        let storage = Redis::open("redis://127.0.0.1:1/").unwrap();

        assert!(storage.get(String::from("k")).is_none());
        assert!(storage.set(String::from("k"), String::from("v")).is_err());
        assert!(storage.delete(String::from("k")).is_err());
    }
}
