use crate::domain::card::Card;
use crate::domain::catalog::CatalogStore;
use crate::domain::utils::{collation_key, fold_case};
use crate::ports::outbound::card_source::CardSource;
use crate::ports::outbound::storage::Storage;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Exact-match constraints; an empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub club: String,
    pub card_type: String,
    pub position: String,
}

impl Filters {
    #[must_use]
    pub fn new(club: &str, card_type: &str, position: &str) -> Self {
        Self {
            club: club.trim().to_string(),
            card_type: card_type.trim().to_string(),
            position: position.trim().to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.club.is_empty() && self.card_type.is_empty() && self.position.is_empty()
    }

    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        holds(&self.club, card.club.as_deref())
            && holds(&self.card_type, card.card_type.as_deref())
            && holds(&self.position, card.position.as_deref())
    }
}

fn holds(constraint: &str, value: Option<&str>) -> bool {
    constraint.is_empty() || value == Some(constraint)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
    Rarity,
}

impl SortKey {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rarity => "rarity",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown sort key '{0}', expected name, price-asc, price-desc or rarity")]
pub struct UnknownSortKey(String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price-asc" | "price-low" => Ok(SortKey::PriceAsc),
            "price-desc" | "price-high" => Ok(SortKey::PriceDesc),
            "rarity" => Ok(SortKey::Rarity),
            _ => Err(UnknownSortKey(key.to_string())),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Distinct values present in the catalog, for filter pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub clubs: Vec<String>,
    pub types: Vec<String>,
    pub positions: Vec<String>,
}

/// Case-insensitive substring match on name, club and position.
///
/// A blank query keeps every card in its original order.
#[must_use]
pub fn search<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    let query = fold_case(query.trim());
    if query.is_empty() {
        return cards.iter().collect();
    }

    cards
        .iter()
        .filter(|card| matches_query(card, &query))
        .collect()
}

fn matches_query(card: &Card, folded_query: &str) -> bool {
    [
        Some(card.name.as_str()),
        card.club.as_deref(),
        card.position.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| fold_case(field).contains(folded_query))
}

/// Stable in-place sort; equal keys keep their relative order.
pub fn sort_cards(cards: &mut [&Card], key: SortKey) {
    match key {
        SortKey::Name => {
            cards.sort_by_cached_key(|card| (collation_key(&card.name), card.name.clone()));
        }
        SortKey::PriceAsc => cards.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => cards.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rarity => cards.sort_by(|a, b| b.rarity_rank().cmp(&a.rarity_rank())),
    }
}

impl<CS, S> CatalogStore<CS, S>
where
    CS: CardSource + Send + Sync,
    S: Storage + Send + Sync,
{
    /// Runs a search without touching the committed query.
    #[must_use]
    pub fn preview_search(&self, query: &str) -> Vec<&Card> {
        search(&self.state.all_cards, query)
    }

    /// Commits the query so it combines with the filters from now on.
    pub fn set_search_query(&mut self, query: &str) -> Vec<&Card> {
        self.state.search_query = query.trim().to_string();
        search(&self.state.all_cards, &self.state.search_query)
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.state.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.state.filters = Filters::default();
        self.state.search_query.clear();
    }

    /// Committed search result narrowed by every non-empty filter, in
    /// catalog order.
    #[must_use]
    pub fn apply_filters(&self) -> Vec<&Card> {
        let filters = &self.state.filters;
        search(&self.state.all_cards, &self.state.search_query)
            .into_iter()
            .filter(|card| filters.accepts(card))
            .collect()
    }

    /// Commits `key` and returns the filtered view sorted by it.
    pub fn sort_by(&mut self, key: SortKey) -> Vec<&Card> {
        self.state.sort = key;
        self.view()
    }

    /// Filtered view sorted by the committed sort key.
    #[must_use]
    pub fn view(&self) -> Vec<&Card> {
        let mut cards = self.apply_filters();
        sort_cards(&mut cards, self.state.sort);
        cards
    }

    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        let mut clubs = BTreeSet::new();
        let mut types = BTreeSet::new();
        let mut positions = BTreeSet::new();

        for card in &self.state.all_cards {
            clubs.extend(card.club.clone());
            types.extend(card.card_type.clone());
            positions.extend(card.position.clone());
        }

        FilterOptions {
            clubs: clubs.into_iter().collect(),
            types: types.into_iter().collect(),
            positions: positions.into_iter().collect(),
        }
    }
}
