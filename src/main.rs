//! Exchange Locator server binary.

use anyhow::Context;
use exchange_locator::api::rest::{create_router, AppState};
use exchange_locator::application::services::{NearbySearchEngine, SearchConfig};
use exchange_locator::config::AppConfig;
use exchange_locator::infrastructure::persistence::in_memory::{
    InMemoryCurrencyLookup, InMemoryOfficeStore,
};
use exchange_locator::infrastructure::persistence::seed::SeedData;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let (store, lookup) = match &config.data.seed_path {
        Some(path) => {
            let seed = SeedData::from_path(path)
                .with_context(|| format!("failed to load seed file {path}"))?;
            let (store, lookup) = seed
                .build_stores()
                .await
                .context("failed to build stores from seed")?;
            info!(
                offices = store.len(),
                currencies = lookup.len(),
                "seeded in-memory stores"
            );
            (store, lookup)
        }
        None => {
            info!("no seed file configured, starting empty");
            (InMemoryOfficeStore::new(), InMemoryCurrencyLookup::new())
        }
    };

    let engine = NearbySearchEngine::new(
        Arc::new(store),
        Arc::new(lookup),
        SearchConfig::with_store_timeout(config.search.store_timeout_ms),
    );
    let router = create_router(AppState {
        engine: Arc::new(engine),
    });

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "exchange-locator listening");

    axum::serve(listener, router)
        .await
        .context("server error")?;
    Ok(())
}
