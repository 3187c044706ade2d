use crate::domain::card::CardId;
use crate::ports::outbound::card_source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] SourceError),
    #[error("Catalog data is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("No card with id {0}")]
    NotFound(CardId),
    #[error("No cart line at position {index} (cart holds {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("The cart is empty")]
    EmptyCart,
    #[error("Card {0} is already in the collection")]
    Duplicate(CardId),
    #[error("A card needs a name")]
    MissingName,
    #[error("No numeric card id is left above {0}")]
    IdsExhausted(u64),
}

impl StoreError {
    /// Errors callers should treat as success, such as re-adding an owned card.
    #[must_use]
    pub fn is_benign(&self) -> bool {
        matches!(self, StoreError::Duplicate(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_from_source_error() {
        let error = LoadError::from(SourceError::new(String::from("connection refused")));
        assert!(matches!(error, LoadError::Transport(_)));
        assert_eq!(
            error.to_string(),
            "Error fetching card catalog: connection refused"
        );
    }

    #[test]
    fn test_store_error_display() {
        assert_eq!(
            StoreError::NotFound(CardId::from(9)).to_string(),
            "No card with id 9"
        );
        assert_eq!(
            StoreError::IndexOutOfBounds { index: 3, len: 1 }.to_string(),
            "No cart line at position 3 (cart holds 1)"
        );
    }

    #[test]
    fn test_only_duplicate_is_benign() {
        assert!(StoreError::Duplicate(CardId::from(1)).is_benign());
        assert!(!StoreError::NotFound(CardId::from(1)).is_benign());
        assert!(!StoreError::EmptyCart.is_benign());
        assert!(!StoreError::MissingName.is_benign());
        assert!(!StoreError::IdsExhausted(u64::MAX).is_benign());
    }
}
