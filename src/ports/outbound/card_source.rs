use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error fetching card catalog: {0}")]
pub struct SourceError(String);

impl SourceError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Where the raw catalog document comes from.
///
/// Implementations hand back the undecoded body; shape detection and card
/// normalisation belong to the domain.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardSource {
    async fn fetch(&self) -> Result<String, SourceError>;
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let error = SourceError::new(String::from("404 Not Found"));
        assert_eq!(
            error.to_string(),
            "Error fetching card catalog: 404 Not Found"
        );
    }

    #[tokio::test]
    async fn test_mock_card_source_fetch() {
        let mut source = MockCardSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Ok(String::from("[]")));

        assert_eq!(source.fetch().await.unwrap(), "[]");
    }
}
