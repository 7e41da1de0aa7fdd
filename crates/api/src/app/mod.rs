//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses
//! - `openapi.rs`: the generated API description

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use storeapi_inventory::ItemRepository;

use crate::config::ApiConfig;

pub mod errors;
pub mod openapi;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The repository is injected rather than created here so callers control
/// the seed.
pub fn build_app(config: &ApiConfig, repository: Arc<ItemRepository>) -> Router {
    let docs = Arc::new(openapi::doc(config));
    let banner = routes::system::Banner(Arc::from(config.welcome_banner()));

    Router::new()
        .route("/", get(routes::system::welcome))
        .route("/health", get(routes::system::health))
        .route(&config.docs_path, get(routes::system::openapi_doc))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(Extension(repository))
                .layer(Extension(docs))
                .layer(Extension(banner)),
        )
}
