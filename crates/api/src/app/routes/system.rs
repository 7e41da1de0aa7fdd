use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};
use utoipa::openapi::OpenApi;

/// Landing page text, rendered once from the config.
#[derive(Debug, Clone)]
pub struct Banner(pub Arc<str>);

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn welcome(Extension(banner): Extension<Banner>) -> String {
    banner.0.to_string()
}

pub async fn openapi_doc(Extension(doc): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}
