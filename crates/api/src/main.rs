use std::sync::Arc;

use anyhow::Context;

use storeapi_api::{config::ApiConfig, seed};
use storeapi_inventory::ItemRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storeapi_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    let items = seed::load_seed(config.seed_path.as_deref()).context("failed to load seed data")?;
    let repository = Arc::new(ItemRepository::new(items).context("invalid seed data")?);
    tracing::info!(items = repository.len(), "store seeded");

    let app = storeapi_api::app::build_app(&config, repository);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        "REST API listening at {}:{} (docs at {})",
        config.base_url,
        listener.local_addr()?.port(),
        config.docs_url()
    );

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
