use crate::domain::card::{Card, CardId};
use crate::domain::catalog::CatalogStore;
use crate::domain::error::StoreError;
use crate::ports::outbound::card_source::CardSource;
use crate::ports::outbound::storage::Storage;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub item_count: usize,
    pub total: f64,
}

/// Sum of effective prices, rounded to the cent.
#[must_use]
pub fn total(cards: &[Card]) -> f64 {
    let sum: f64 = cards.iter().map(|card| card.price).sum();
    (sum * 100.0).round() / 100.0
}

impl<CS, S> CatalogStore<CS, S>
where
    CS: CardSource + Send + Sync,
    S: Storage + Send + Sync,
{
    /// Appends a copy of the catalog card; the same id may be added twice.
    pub fn add_to_cart(&mut self, id: &CardId) -> Result<(), StoreError> {
        let card = self
            .find_card(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        log::debug!("Adding {} ({}) to cart", card.name, card.id);
        self.state.cart.push(card);
        Ok(())
    }

    pub fn remove_from_cart(&mut self, index: usize) -> Result<Card, StoreError> {
        let len = self.state.cart.len();
        if index >= len {
            return Err(StoreError::IndexOutOfBounds { index, len });
        }

        Ok(self.state.cart.remove(index))
    }

    /// Totals and empties the cart in one step. The collection and storage
    /// are left alone.
    pub fn checkout(&mut self) -> Result<Receipt, StoreError> {
        if self.state.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let purchased = std::mem::take(&mut self.state.cart);
        let receipt = Receipt {
            item_count: purchased.len(),
            total: total(&purchased),
        };

        log::info!(
            "Checked out {} card(s) for {:.2}",
            receipt.item_count,
            receipt.total
        );
        Ok(receipt)
    }

    #[must_use]
    pub fn cart_total(&self) -> f64 {
        total(&self.state.cart)
    }

    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.state.cart.len()
    }
}
