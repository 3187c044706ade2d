pub mod file_system;
pub mod http;

use crate::adapters::outbound::card_source::file_system::FileSystem;
use crate::adapters::outbound::card_source::http::Http;
use crate::ports::outbound::card_source::{CardSource, SourceError};
use async_trait::async_trait;

pub enum Source {
    FileSystem(FileSystem),
    Http(Http),
}

#[async_trait]
impl CardSource for Source {
    async fn fetch(&self) -> Result<String, SourceError> {
        match self {
            Source::FileSystem(source) => source.fetch().await,
            Source::Http(source) => source.fetch().await,
        }
    }

    fn location(&self) -> String {
        match self {
            Source::FileSystem(source) => source.location(),
            Source::Http(source) => source.location(),
        }
    }
}

/// `http://` and `https://` locations are fetched over the network, anything
/// else is read as a local path.
#[must_use]
pub fn init_card_source(location: &str) -> Source {
    if location.starts_with("http://") || location.starts_with("https://") {
        Source::Http(Http::new(location))
    } else {
        Source::FileSystem(FileSystem::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_picks_http_for_urls() {
        assert!(matches!(
            init_card_source("https://cards.example/cards.json"),
            Source::Http(_)
        ));
        assert!(matches!(
            init_card_source("http://localhost:8080/cards.json"),
            Source::Http(_)
        ));
    }

    #[test]
    fn test_init_picks_file_system_for_paths() {
        let source = init_card_source("cards.json");
        assert!(matches!(source, Source::FileSystem(_)));
        assert_eq!(source.location(), "cards.json");
    }
}
