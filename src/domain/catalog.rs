use crate::domain::card::{Card, CardId};
use crate::domain::error::LoadError;
use crate::domain::query::{Filters, SortKey};
use crate::ports::outbound::card_source::CardSource;
use crate::ports::outbound::storage::Storage;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    NotLoaded,
    Loaded(usize),
    Failed(String),
}

#[derive(Debug, Default)]
pub(crate) struct CatalogState {
    pub(crate) all_cards: Vec<Card>,
    pub(crate) cart: Vec<Card>,
    pub(crate) collection: Vec<Card>,
    pub(crate) for_sale: Vec<Card>,
    pub(crate) filters: Filters,
    pub(crate) search_query: String,
    pub(crate) sort: SortKey,
}

/// Owns the catalog, the cart, the collection and the sale listings, plus
/// the current search/filter/sort selection.
///
/// The presentation layer only ever reads derived views and calls the
/// mutation methods; it never touches the sequences directly.
pub struct CatalogStore<CS, S> {
    pub(crate) source: CS,
    pub(crate) storage: S,
    pub(crate) state: CatalogState,
    status: LoadStatus,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Value>),
    Wrapped { cards: Vec<Value> },
}

impl CatalogDocument {
    fn into_entries(self) -> Vec<Value> {
        match self {
            CatalogDocument::Bare(entries) | CatalogDocument::Wrapped { cards: entries } => entries,
        }
    }
}

/// Decodes a catalog body into unique cards, keeping source order.
///
/// Entries that cannot become a card (no id, wrong field types) and repeated
/// ids are skipped with a warning rather than failing the whole catalog.
pub fn parse_catalog(body: &str) -> Result<Vec<Card>, LoadError> {
    let document = serde_json::from_str::<Value>(body)
        .map_err(|why| LoadError::Malformed(why.to_string()))?;
    let entries = serde_json::from_value::<CatalogDocument>(document)
        .map_err(|_| {
            LoadError::Malformed(String::from(
                "expected an array of cards or an object with a `cards` array",
            ))
        })?
        .into_entries();

    let mut seen: HashSet<CardId> = HashSet::with_capacity(entries.len());
    let mut cards = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Card>(entry) {
            Ok(card) if seen.insert(card.id.clone()) => cards.push(card),
            Ok(card) => log::warn!("Skipping duplicate card id {} at entry {index}", card.id),
            Err(why) => log::warn!("Skipping unreadable card at entry {index}: {why}"),
        }
    }

    Ok(cards)
}

impl<CS, S> CatalogStore<CS, S>
where
    CS: CardSource + Send + Sync,
    S: Storage + Send + Sync,
{
    pub fn new(source: CS, storage: S) -> Self {
        Self {
            source,
            storage,
            state: CatalogState::default(),
            status: LoadStatus::NotLoaded,
        }
    }

    /// Fetches the catalog and replaces `all_cards` wholesale.
    ///
    /// On failure the previous catalog is kept and the status moves to
    /// `LoadStatus::Failed`; retrying is up to the caller.
    pub async fn load(&mut self) -> Result<(), LoadError> {
        let body = match self.source.fetch().await {
            Ok(body) => body,
            Err(why) => {
                let error = LoadError::from(why);
                self.fail_load(&error);
                return Err(error);
            }
        };

        self.load_json(&body)
    }

    pub fn load_json(&mut self, body: &str) -> Result<(), LoadError> {
        let cards = match parse_catalog(body) {
            Ok(cards) => cards,
            Err(error) => {
                self.fail_load(&error);
                return Err(error);
            }
        };

        if cards.is_empty() {
            log::warn!("No cards found in catalog from {}", self.source.location());
        }
        log::info!(
            "Loaded {} cards from {}",
            cards.len(),
            self.source.location()
        );

        self.status = LoadStatus::Loaded(cards.len());
        self.state.all_cards = cards;
        self.state.filters = Filters::default();
        self.state.search_query = String::new();
        self.state.sort = SortKey::default();
        Ok(())
    }

    fn fail_load(&mut self, error: &LoadError) {
        log::error!(
            "Failed to load catalog from {}: {error}",
            self.source.location()
        );
        self.status = LoadStatus::Failed(error.to_string());
    }

    #[must_use]
    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn all_cards(&self) -> &[Card] {
        &self.state.all_cards
    }

    #[must_use]
    pub fn cart(&self) -> &[Card] {
        &self.state.cart
    }

    #[must_use]
    pub fn collection(&self) -> &[Card] {
        &self.state.collection
    }

    #[must_use]
    pub fn for_sale(&self) -> &[Card] {
        &self.state.for_sale
    }

    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.state.filters
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.state.sort
    }

    pub(crate) fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.state.all_cards.iter().find(|card| &card.id == id)
    }
}
