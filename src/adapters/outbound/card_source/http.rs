use crate::ports::outbound::card_source::{CardSource, SourceError};
use async_trait::async_trait;
use reqwest::Client;

pub struct Http {
    client: Client,
    url: String,
}

impl Http {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl CardSource for Http {
    async fn fetch(&self) -> Result<String, SourceError> {
        let response = match self.client.get(&self.url).send().await {
            Ok(response) => response,
            Err(why) => {
                log::warn!("Error requesting catalog {why:?}");
                return Err(SourceError::new(format!("Request to {} failed", self.url)));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::new(format!("{} answered {status}", self.url)));
        }

        response.text().await.map_err(|why| {
            log::warn!("Error reading catalog body {why:?}");
            SourceError::new(format!("Unreadable body from {}", self.url))
        })
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
