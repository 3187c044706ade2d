use crate::adapters::outbound::storage::in_memory::InMemory;
use crate::domain::catalog::CatalogStore;
use crate::ports::outbound::card_source::MockCardSource;

pub(crate) const CATALOG: &str = r#"{
    "season": "2025-26",
    "cards": [
        {"id": 1, "name": "Kylian Mbappé", "club": "PSG", "type": "Base", "position": "Attaquant", "rarity": "legendary", "price": 12.5},
        {"id": 2, "name": "Achraf Hakimi", "club": "PSG", "type": "Rare", "position": "Défenseur", "rarity": "epic", "price": 6, "price_avg": 7.5},
        {"id": 3, "name": "Alexandre Lacazette", "club": "OL", "type": "Base", "position": "Attaquant", "rarity": "rare", "price": 5},
        {"id": 4, "name": "Gianluigi Donnarumma", "club": "PSG", "type": "Base", "position": "Gardien", "rarity": "common", "price": 3.25},
        {"id": 5, "name": "Jonathan David", "club": "LOSC", "type": "Rare", "position": "Attaquant", "price": 9},
        {"number": "OM-1", "name": "Élie Valère", "team": "OM", "type": "Base", "pos": "Milieu", "rarity": "uncommon", "price": 1}
    ]
}"#;

pub(crate) fn card_source() -> MockCardSource {
    let mut source = MockCardSource::new();
    source
        .expect_location()
        .returning(|| String::from("cards.json"));
    source
}

pub(crate) fn catalog_store() -> CatalogStore<MockCardSource, InMemory> {
    CatalogStore::new(card_source(), InMemory::new())
}

pub(crate) fn loaded_store() -> CatalogStore<MockCardSource, InMemory> {
    let mut store = catalog_store();
    store.load_json(CATALOG).unwrap();
    store
}
