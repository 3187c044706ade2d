use crate::domain::cart::total;
use crate::domain::catalog::CatalogStore;
use crate::ports::outbound::card_source::CardSource;
use crate::ports::outbound::storage::Storage;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_cards: usize,
    pub avg_price: f64,
    pub collection_count: usize,
    pub for_sale_count: usize,
    pub cart_count: usize,
    pub cart_total: f64,
}

impl<CS, S> CatalogStore<CS, S>
where
    CS: CardSource + Send + Sync,
    S: Storage + Send + Sync,
{
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_stats(&self) -> CatalogStats {
        let cards = &self.state.all_cards;
        let avg_price = if cards.is_empty() {
            0.0
        } else {
            cards.iter().map(|card| card.price).sum::<f64>() / cards.len() as f64
        };

        CatalogStats {
            total_cards: cards.len(),
            avg_price,
            collection_count: self.state.collection.len(),
            for_sale_count: self.state.for_sale.len(),
            cart_count: self.state.cart.len(),
            cart_total: total(&self.state.cart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{CardId, CustomCard};
    use crate::domain::fixtures::{catalog_store, loaded_store};

    #[test]
    fn test_stats_on_empty_catalog() {
        let store = catalog_store();

        let stats = store.compute_stats();

        assert_eq!(stats.total_cards, 0);
        assert_eq!(stats.avg_price, 0.0);
        assert_eq!(format!("{:.2}", stats.avg_price), "0.00");
    }

    #[test]
    fn test_stats_average_uses_effective_price() {
        let mut store = catalog_store();
        store
            .load_json(r#"[{"id": 1, "name": "A", "price": 1, "price_avg": 4}, {"id": 2, "name": "B", "price": 2}, {"id": 3, "name": "C"}]"#)
            .unwrap();

        assert_eq!(store.compute_stats().avg_price, 2.0);
    }

    #[test]
    fn test_stats_counts_every_sequence() {
        let mut store = loaded_store();
        store.add_to_cart(&CardId::from(1)).unwrap();
        store.add_to_cart(&CardId::from(4)).unwrap();
        store.add_to_collection(&CardId::from(3)).unwrap();
        store.add_and_sell(CustomCard::named("Vente")).unwrap();

        let stats = store.compute_stats();

        assert_eq!(
            stats,
            CatalogStats {
                total_cards: 6,
                avg_price: 6.375,
                collection_count: 1,
                for_sale_count: 1,
                cart_count: 2,
                cart_total: 15.75,
            }
        );
    }
}
