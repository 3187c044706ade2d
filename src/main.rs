use cartashop::adapters::inbound::create_client;
use cartashop::adapters::outbound::card_source::init_card_source;
use cartashop::adapters::outbound::storage::init_storage;
use cartashop::config::Config;
use cartashop::domain::catalog::CatalogStore;
use cartashop::ports::inbound::client::Client;
use dotenv::dotenv;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(why) => {
            log::error!("{why}");
            return ExitCode::FAILURE;
        }
    };

    let storage = match init_storage(&config.storage) {
        Ok(storage) => storage,
        Err(why) => {
            log::error!("Could not open storage {:?}: {why}", config.storage);
            return ExitCode::FAILURE;
        }
    };

    let mut store = CatalogStore::new(init_card_source(&config.cards), storage);
    store.restore();
    // A failed load leaves the shop usable; the client offers `reload`.
    if store.load().await.is_err() {
        log::warn!("Starting without a catalog");
    }

    let mut client = create_client(store, config.display_cap);
    client.run().await;

    ExitCode::SUCCESS
}
