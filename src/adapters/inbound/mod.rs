pub mod console;

use crate::adapters::inbound::console::Console;
use crate::domain::catalog::CatalogStore;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::card_source::CardSource;
use crate::ports::outbound::storage::Storage;

pub fn create_client<CS, S>(store: CatalogStore<CS, S>, display_cap: usize) -> impl Client
where
    CS: CardSource + Send + Sync + 'static,
    S: Storage + Send + Sync + 'static,
{
    Console::new(store, display_cap)
}
