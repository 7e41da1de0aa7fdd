use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use storeapi_inventory::{ItemPayload, ItemRepository};

use crate::app::errors;

pub async fn get_item(
    Extension(repository): Extension<Arc<ItemRepository>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match repository.find_by_name(&name) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(repository): Extension<Arc<ItemRepository>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(repository.list_all())).into_response()
}

pub async fn create_item(
    Extension(repository): Extension<Arc<ItemRepository>>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> axum::response::Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "create rejected: unreadable body");
            return errors::json_rejection_to_response(rejection);
        }
    };

    match repository.insert(&payload) {
        Ok(item) => {
            tracing::info!(name = %item.name(), amount = item.amount().get(), "item created");
            (StatusCode::CREATED, Json(item)).into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, code = e.code(), "create rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn update_item(
    Extension(repository): Extension<Arc<ItemRepository>>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> axum::response::Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "update rejected: unreadable body");
            return errors::json_rejection_to_response(rejection);
        }
    };

    match repository.update(&payload) {
        Ok(item) => {
            tracing::info!(name = %item.name(), amount = item.amount().get(), "item updated");
            (StatusCode::OK, Json(item)).into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, code = e.code(), "update rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn delete_item(
    Extension(repository): Extension<Arc<ItemRepository>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match repository.delete(&name) {
        Ok(()) => {
            tracing::info!(name = %name.trim(), "item deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn reset_store(Extension(repository): Extension<Arc<ItemRepository>>) -> StatusCode {
    repository.reset();
    tracing::info!(items = repository.len(), "store reset to seed");
    StatusCode::NO_CONTENT
}
