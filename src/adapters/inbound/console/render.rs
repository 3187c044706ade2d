use crate::domain::card::{Card, Rarity, DEFAULT_CLUB, DEFAULT_TYPE};
use crate::domain::cart::Receipt;
use crate::domain::query::FilterOptions;
use crate::domain::stats::CatalogStats;

const UNKNOWN_RARITY: &str = "Commune";

pub const HELP: &str = "\
\u{001b}[1;4;34mBrowsing\u{001b}[0m
  list                         show the catalog with the current search, filters and sort
  search <text>                keep cards whose name, club or position contains <text>
  preview <text>               same as search without changing the current search
  filter club|type|position <value>
                               exact match on one field, no value clears it
  clear                        drop the search and every filter
  sort name|price-asc|price-desc|rarity
  options                      list the clubs, types and positions in the catalog

\u{001b}[1;4;34mCart\u{001b}[0m
  add <id>                     put a catalog card in the cart
  remove <n>                   take out the n-th cart line
  cart                         show the cart and its total
  checkout                     pay for the cart and empty it

\u{001b}[1;4;34mCollection\u{001b}[0m
  collect <id>                 add a catalog card to your collection
  collection                   show your collection
  create <name>[;club;type;position;price]
                               add a card of your own to your collection
  sell <name>[;club;type;position;price]
                               list a card of your own for sale
  forsale                      show your sale listings
  reset                        forget your collection and sale listings

\u{001b}[1;4;34mOther\u{001b}[0m
  stats                        catalog and cart figures
  reload                       fetch the catalog again
  help                         show this message
  quit                         leave";

fn rarity_label(rarity: Option<Rarity>) -> &'static str {
    match rarity {
        None => UNKNOWN_RARITY,
        Some(Rarity::Common) => "Commune",
        Some(Rarity::Uncommon) => "Peu commune",
        Some(Rarity::Rare) => "Rare",
        Some(Rarity::Epic) => "Épique",
        Some(Rarity::Legendary) => "Légendaire",
    }
}

pub fn price(amount: f64) -> String {
    format!("€{amount:.2}")
}

pub fn card_line(card: &Card) -> String {
    format!(
        "#{} {} | {} | {} | {} | {}",
        card.id,
        card.name,
        card.club.as_deref().unwrap_or(DEFAULT_CLUB),
        card.card_type.as_deref().unwrap_or(DEFAULT_TYPE),
        price(card.price),
        rarity_label(card.rarity)
    )
}

/// At most `cap` rows, followed by a count of the rows left out.
pub fn listing(title: &str, cards: &[&Card], cap: usize) -> String {
    if cards.is_empty() {
        return format!("{title}: nothing to show");
    }

    let mut out = format!("{title} ({})", cards.len());
    for card in cards.iter().take(cap) {
        out.push_str("\n  ");
        out.push_str(&card_line(card));
    }
    if cards.len() > cap {
        out.push_str(&format!("\n  ... and {} more", cards.len() - cap));
    }
    out
}

pub fn cart(cards: &[Card], total: f64, cap: usize) -> String {
    if cards.is_empty() {
        return String::from("Cart is empty");
    }

    let mut out = format!("Cart ({})", cards.len());
    for (index, card) in cards.iter().enumerate().take(cap) {
        out.push_str(&format!("\n  {}. {}", index + 1, card_line(card)));
    }
    if cards.len() > cap {
        out.push_str(&format!("\n  ... and {} more", cards.len() - cap));
    }
    out.push_str(&format!("\nTotal: {}", price(total)));
    out
}

pub fn receipt(receipt: &Receipt) -> String {
    format!(
        "Paid {} for {} card(s). Thank you!",
        price(receipt.total),
        receipt.item_count
    )
}

pub fn stats(stats: &CatalogStats) -> String {
    format!(
        "Cards in catalog: {}\nAverage price: {}\nCollection: {}\nFor sale: {}\nCart: {} card(s), {}",
        stats.total_cards,
        price(stats.avg_price),
        stats.collection_count,
        stats.for_sale_count,
        stats.cart_count,
        price(stats.cart_total)
    )
}

pub fn options(options: &FilterOptions) -> String {
    let join = |values: &[String]| {
        if values.is_empty() {
            String::from("-")
        } else {
            values.join(", ")
        }
    };

    format!(
        "Clubs: {}\nTypes: {}\nPositions: {}",
        join(&options.clubs),
        join(&options.types),
        join(&options.positions)
    )
}
