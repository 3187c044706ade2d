pub mod command;
pub mod render;

use crate::adapters::inbound::console::command::{Command, FilterField};
use crate::domain::card::Card;
use crate::domain::catalog::{CatalogStore, LoadStatus};
use crate::domain::error::StoreError;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::card_source::CardSource;
use crate::ports::outbound::storage::Storage;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const PROMPT: &str = "> ";

#[derive(Debug, PartialEq)]
pub enum Reply {
    Continue(String),
    Quit,
}

/// Line-oriented shop front over a `CatalogStore`.
pub struct Console<CS, S> {
    store: CatalogStore<CS, S>,
    display_cap: usize,
}

fn notice(error: &StoreError, success: &str) -> String {
    if error.is_benign() {
        success.to_string()
    } else {
        error.to_string()
    }
}

impl<CS, S> Console<CS, S>
where
    CS: CardSource + Send + Sync,
    S: Storage + Send + Sync,
{
    pub fn new(store: CatalogStore<CS, S>, display_cap: usize) -> Self {
        Self { store, display_cap }
    }

    #[must_use]
    pub fn store(&self) -> &CatalogStore<CS, S> {
        &self.store
    }

    fn greeting(&self) -> String {
        let status = match self.store.load_status() {
            LoadStatus::NotLoaded => String::from("Catalog not loaded yet, try `reload`"),
            LoadStatus::Loaded(count) => format!("{count} cards in the catalog"),
            LoadStatus::Failed(why) => format!("{why}. Try `reload`"),
        };
        format!("Welcome to CartaShop! {status}. Type `help` for commands.")
    }

    fn listing(&self, title: &str, cards: &[&Card]) -> String {
        render::listing(title, cards, self.display_cap)
    }

    fn owned_listing(&self, title: &str, cards: &[Card]) -> String {
        let cards: Vec<&Card> = cards.iter().collect();
        self.listing(title, &cards)
    }

    pub async fn handle(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Continue(String::new());
        }

        let command = match command::parse(line) {
            Ok(command) => command,
            Err(why) => return Reply::Continue(why.to_string()),
        };

        let out = match command {
            Command::Quit => return Reply::Quit,
            Command::Reload => match self.store.load().await {
                Ok(()) => format!("Catalog reloaded: {} cards", self.store.all_cards().len()),
                Err(why) => format!("{why}. The previous catalog is still shown"),
            },
            command => self.execute(command),
        };

        Reply::Continue(out)
    }

    fn execute(&mut self, command: Command) -> String {
        match command {
            Command::List => self.listing("Catalog", &self.store.view()),
            Command::Search(query) => {
                self.store.set_search_query(&query);
                self.listing("Catalog", &self.store.view())
            }
            Command::Preview(query) => self.listing("Preview", &self.store.preview_search(&query)),
            Command::Filter(field, value) => {
                let mut filters = self.store.filters().clone();
                let value = value.trim().to_string();
                match field {
                    FilterField::Club => filters.club = value,
                    FilterField::Type => filters.card_type = value,
                    FilterField::Position => filters.position = value,
                }
                self.store.set_filters(filters);
                self.listing("Catalog", &self.store.view())
            }
            Command::Clear => {
                self.store.clear_filters();
                self.listing("Catalog", &self.store.view())
            }
            Command::Sort(key) => {
                let cards = self.store.sort_by(key);
                render::listing(&format!("Catalog by {key}"), &cards, self.display_cap)
            }
            Command::Options => render::options(&self.store.filter_options()),
            Command::Add(id) => match self.store.add_to_cart(&id) {
                Ok(()) => format!(
                    "Added #{id} to the cart ({} in cart, {})",
                    self.store.cart_count(),
                    render::price(self.store.cart_total())
                ),
                Err(why) => why.to_string(),
            },
            Command::Remove(position) => match self.store.remove_from_cart(position - 1) {
                Ok(card) => format!("Removed {} from the cart", card.name),
                Err(StoreError::IndexOutOfBounds { len, .. }) => {
                    format!("No cart line {position}, the cart holds {len}")
                }
                Err(why) => why.to_string(),
            },
            Command::Cart => render::cart(
                self.store.cart(),
                self.store.cart_total(),
                self.display_cap,
            ),
            Command::Checkout => match self.store.checkout() {
                Ok(receipt) => render::receipt(&receipt),
                Err(why) => why.to_string(),
            },
            Command::Collect(id) => match self.store.add_to_collection(&id) {
                Ok(()) => format!("Added #{id} to your collection"),
                Err(why) => notice(&why, &format!("#{id} is already in your collection")),
            },
            Command::Collection => self.owned_listing("Collection", self.store.collection()),
            Command::ForSale => self.owned_listing("For sale", self.store.for_sale()),
            Command::Create(fields) => match self.store.add_card_to_collection(fields) {
                Ok(card) => format!("Added {} to your collection", render::card_line(&card)),
                Err(why) => why.to_string(),
            },
            Command::Sell(fields) => match self.store.add_and_sell(fields) {
                Ok(card) => format!("Listed {} for sale", render::card_line(&card)),
                Err(why) => why.to_string(),
            },
            Command::Stats => render::stats(&self.store.compute_stats()),
            Command::Reset => {
                self.store.reset_saved();
                String::from("Collection and sale listings cleared")
            }
            Command::Help => render::HELP.to_string(),
            Command::Quit | Command::Reload => String::new(),
        }
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub async fn serve<R, W>(&mut self, input: R, mut output: W)
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        let mut lines = input.lines();
        let greeting = self.greeting();
        if !write_out(&mut output, &greeting).await {
            return;
        }

        loop {
            if !write_prompt(&mut output).await {
                return;
            }

            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(why) => {
                    log::error!("Error reading command {why:?}");
                    break;
                }
            };

            match self.handle(&line).await {
                Reply::Quit => break,
                Reply::Continue(out) if out.is_empty() => {}
                Reply::Continue(out) => {
                    if !write_out(&mut output, &out).await {
                        return;
                    }
                }
            }
        }

        write_out(&mut output, "Bye!").await;
    }
}

async fn write_prompt<W: AsyncWrite + Unpin + Send>(output: &mut W) -> bool {
    let result = match output.write_all(PROMPT.as_bytes()).await {
        Ok(()) => output.flush().await,
        Err(why) => Err(why),
    };
    if let Err(why) = result {
        log::warn!("Error writing prompt {why:?}");
        return false;
    }
    true
}

async fn write_out<W: AsyncWrite + Unpin + Send>(output: &mut W, text: &str) -> bool {
    let result = match output.write_all(format!("{text}\n").as_bytes()).await {
        Ok(()) => output.flush().await,
        Err(why) => Err(why),
    };
    if let Err(why) = result {
        log::warn!("Error writing output {why:?}");
        return false;
    }
    true
}

#[async_trait]
impl<CS, S> Client for Console<CS, S>
where
    CS: CardSource + Send + Sync,
    S: Storage + Send + Sync,
{
    async fn run(&mut self) {
        let input = BufReader::new(tokio::io::stdin());
        self.serve(input, tokio::io::stdout()).await;
    }
}
