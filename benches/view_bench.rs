use criterion::{criterion_group, criterion_main, Bencher, Criterion};

use cartashop::adapters::outbound::card_source::{init_card_source, Source};
use cartashop::adapters::outbound::storage::in_memory::InMemory;
use cartashop::domain::catalog::CatalogStore;
use cartashop::domain::query::{Filters, SortKey};

const CLUBS: [&str; 6] = ["PSG", "OM", "OL", "LOSC", "OGC Nice", "Stade Rennais"];
const POSITIONS: [&str; 4] = ["Gardien", "Défenseur", "Milieu", "Attaquant"];
const RARITIES: [&str; 6] = ["common", "uncommon", "rare", "epic", "legendary", "mythique"];

fn catalog(size: usize) -> String {
    let cards: Vec<serde_json::Value> = (0..size)
        .map(|i| {
            serde_json::json!({
                "id": i + 1,
                "name": format!("Joueur Éà {}", (i * 7919) % size),
                "club": CLUBS[i % CLUBS.len()],
                "type": if i % 3 == 0 { "Rare" } else { "Base" },
                "position": POSITIONS[i % POSITIONS.len()],
                "rarity": RARITIES[i % RARITIES.len()],
                "price": ((i * 37) % 2000) as f64 / 100.0,
            })
        })
        .collect();
    serde_json::json!({ "cards": cards }).to_string()
}

fn loaded_store(size: usize) -> CatalogStore<Source, InMemory> {
    let mut store = CatalogStore::new(init_card_source("cards.json"), InMemory::new());
    if let Err(why) = store.load_json(&catalog(size)) {
        panic!("bench catalog did not load: {why}");
    }
    store
}

fn bench(c: &mut Criterion) {
    let body = catalog(5_000);
    c.bench_function("Parse 5k catalog", |b: &mut Bencher| {
        b.iter(|| cartashop::domain::catalog::parse_catalog(&body))
    });

    let mut store = loaded_store(5_000);
    for key in [SortKey::Name, SortKey::PriceDesc, SortKey::Rarity] {
        store.sort_by(key);
        c.bench_function(&format!("View 5k by {key}"), |b: &mut Bencher| {
            b.iter(|| store.view().len())
        });
    }

    store.set_search_query("joueur 1");
    store.set_filters(Filters::new("PSG", "", ""));
    c.bench_function("Filtered view 5k", |b: &mut Bencher| {
        b.iter(|| store.view().len())
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench
}

criterion_main!(benches);
