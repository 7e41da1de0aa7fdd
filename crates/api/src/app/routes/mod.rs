use axum::{
    routing::{get, post},
    Router,
};

pub mod items;
pub mod system;

/// Router for the item store endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/items", get(items::list_items))
        .route("/item", post(items::create_item).patch(items::update_item))
        .route("/item/:name", get(items::get_item).delete(items::delete_item))
        .route("/reset", post(items::reset_store))
}
