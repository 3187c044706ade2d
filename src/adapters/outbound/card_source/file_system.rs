use crate::ports::outbound::card_source::{CardSource, SourceError};
use async_trait::async_trait;
use std::path::PathBuf;

pub struct FileSystem {
    path: PathBuf,
}

impl FileSystem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CardSource for FileSystem {
    async fn fetch(&self) -> Result<String, SourceError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(body) => Ok(body),
            Err(why) => {
                log::warn!("Error reading catalog {why:?}");
                Err(SourceError::new(format!(
                    "Unable to read {}: {why}",
                    self.path.display()
                )))
            }
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
