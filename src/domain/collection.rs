use crate::domain::card::{Card, CardId, CustomCard};
use crate::domain::catalog::CatalogStore;
use crate::domain::error::StoreError;
use crate::ports::outbound::card_source::CardSource;
use crate::ports::outbound::storage::Storage;
use std::collections::HashSet;

pub const COLLECTION_KEY: &str = "cartashop_collection";
pub const FOR_SALE_KEY: &str = "cartashop_forSale";

/// Which user-owned sequence a custom card goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingTarget {
    Collection,
    ForSale,
}

fn dedupe_by_id(cards: Vec<Card>) -> Vec<Card> {
    let mut seen = HashSet::new();
    cards
        .into_iter()
        .filter(|card| seen.insert(card.id.clone()))
        .collect()
}

impl<CS, S> CatalogStore<CS, S>
where
    CS: CardSource + Send + Sync,
    S: Storage + Send + Sync,
{
    /// Adds a catalog card to the collection.
    ///
    /// Re-adding an owned id returns `StoreError::Duplicate`, which
    /// `StoreError::is_benign` reports as harmless; nothing changes.
    pub fn add_to_collection(&mut self, id: &CardId) -> Result<(), StoreError> {
        let card = self
            .find_card(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if self.state.collection.iter().any(|owned| &owned.id == id) {
            return Err(StoreError::Duplicate(id.clone()));
        }

        self.state.collection.push(card);
        self.persist();
        Ok(())
    }

    /// Builds a user-authored card and appends it to `target`.
    ///
    /// The id is one past the highest numeric id across the catalog and the
    /// target sequence, and never below the catalog size, so it cannot clash
    /// with a catalog card.
    pub fn create_custom_card(
        &mut self,
        fields: CustomCard,
        target: ListingTarget,
    ) -> Result<Card, StoreError> {
        if fields.name.trim().is_empty() {
            return Err(StoreError::MissingName);
        }

        let card = fields.into_card(self.next_custom_id(target)?);
        match target {
            ListingTarget::Collection => self.state.collection.push(card.clone()),
            ListingTarget::ForSale => self.state.for_sale.push(card.clone()),
        }

        log::info!("Created card {} ({}) for {target:?}", card.name, card.id);
        self.persist();
        Ok(card)
    }

    pub fn add_card_to_collection(&mut self, fields: CustomCard) -> Result<Card, StoreError> {
        self.create_custom_card(fields, ListingTarget::Collection)
    }

    pub fn add_and_sell(&mut self, fields: CustomCard) -> Result<Card, StoreError> {
        self.create_custom_card(fields, ListingTarget::ForSale)
    }

    fn next_custom_id(&self, target: ListingTarget) -> Result<CardId, StoreError> {
        let listed = match target {
            ListingTarget::Collection => &self.state.collection,
            ListingTarget::ForSale => &self.state.for_sale,
        };

        let highest = self
            .state
            .all_cards
            .iter()
            .chain(listed.iter())
            .filter_map(|card| card.id.numeric())
            .max()
            .unwrap_or(0);

        let highest = highest.max(self.state.all_cards.len() as u64);
        highest
            .checked_add(1)
            .map(CardId::from)
            .ok_or(StoreError::IdsExhausted(highest))
    }

    /// Writes the collection and the sale listings. Failures are logged and
    /// never undo the in-memory change.
    pub fn persist(&self) {
        self.write_cards(COLLECTION_KEY, &self.state.collection);
        self.write_cards(FOR_SALE_KEY, &self.state.for_sale);
    }

    fn write_cards(&self, key: &str, cards: &[Card]) {
        let json = match serde_json::to_string(cards) {
            Ok(json) => json,
            Err(why) => {
                log::warn!("Error serialising {key}: {why}");
                return;
            }
        };

        if let Err(why) = self.storage.set(key.to_string(), json) {
            log::warn!("Error saving {key}: {why}");
        }
    }

    /// Seeds the collection and sale listings from storage. Anything missing
    /// or unreadable starts out empty.
    pub fn restore(&mut self) {
        self.state.collection = dedupe_by_id(self.read_cards(COLLECTION_KEY));
        self.state.for_sale = self.read_cards(FOR_SALE_KEY);

        log::info!(
            "Restored {} collection card(s) and {} listing(s)",
            self.state.collection.len(),
            self.state.for_sale.len()
        );
    }

    fn read_cards(&self, key: &str) -> Vec<Card> {
        let Some(json) = self.storage.get(key.to_string()) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Card>>(&json) {
            Ok(cards) => cards,
            Err(why) => {
                log::warn!("Discarding unreadable {key}: {why}");
                Vec::new()
            }
        }
    }

    /// Forgets the collection and the sale listings, in memory and in
    /// storage.
    pub fn reset_saved(&mut self) {
        self.state.collection.clear();
        self.state.for_sale.clear();

        for key in [COLLECTION_KEY, FOR_SALE_KEY] {
            if let Err(why) = self.storage.delete(key.to_string()) {
                log::warn!("Error deleting {key}: {why}");
            }
        }
    }
}
