use crate::ports::outbound::storage::{Storage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One `<key>.json` file per key inside `dir`.
pub struct FileSystem {
    dir: PathBuf,
}

impl FileSystem {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn storage_error(action: &str, path: &Path, why: &std::io::Error) -> StorageError {
    log::warn!("Error {action} {} {why:?}", path.display());
    StorageError::new(format!("Unable to {action} {}: {why}", path.display()))
}

impl Storage for FileSystem {
    fn get(&self, key: String) -> Option<String> {
        let path = self.path(&key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(why) if why.kind() == ErrorKind::NotFound => None,
            Err(why) => {
                log::warn!("Error reading {} {why:?}", path.display());
                None
            }
        }
    }

    fn set(&self, key: String, value: String) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|why| storage_error("create", &self.dir, &why))?;

        // Written aside then renamed so a crash never leaves half a file.
        let path = self.path(&key);
        let staging = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&staging, value).map_err(|why| storage_error("write", &staging, &why))?;
        fs::rename(&staging, &path).map_err(|why| storage_error("replace", &path, &why))
    }

    fn delete(&self, key: String) -> Result<(), StorageError> {
        let path = self.path(&key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(why) if why.kind() == ErrorKind::NotFound => Ok(()),
            Err(why) => Err(storage_error("delete", &path, &why)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_missing_key() {
        let dir = tempdir().unwrap();
        let storage = FileSystem::new(dir.path());
        assert!(storage.get(String::from("cartashop_collection")).is_none());
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let storage = FileSystem::new(dir.path().join("nested"));

        storage
            .set(String::from("cartashop_forSale"), String::from("[]"))
            .unwrap();

        let written = fs::read_to_string(dir.path().join("nested/cartashop_forSale.json")).unwrap();
        assert_eq!(written, "[]");
        assert!(!dir.path().join("nested/cartashop_forSale.json.tmp").exists());
    }

    #[test]
    fn test_set_then_get_overwrites() {
        let dir = tempdir().unwrap();
        let storage = FileSystem::new(dir.path());

        storage.set(String::from("k"), String::from("[1]")).unwrap();
        storage.set(String::from("k"), String::from("[2]")).unwrap();

        assert_eq!(storage.get(String::from("k")), Some(String::from("[2]")));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let storage = FileSystem::new(dir.path());
        storage.set(String::from("k"), String::from("v")).unwrap();

        storage.delete(String::from("k")).unwrap();
        storage.delete(String::from("k")).unwrap();

        assert!(storage.get(String::from("k")).is_none());
    }

    #[test]
    fn test_set_fails_when_dir_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let storage = FileSystem::new(&blocker);

        let error = storage.set(String::from("k"), String::from("v")).unwrap_err();

        assert!(error.to_string().contains("Unable to create"));
    }
}
