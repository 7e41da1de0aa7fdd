use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storeapi_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    json_error(status, err.code(), err.to_string())
}

/// Body could not be read as the expected JSON shape.
///
/// A well-formed body with wrong keys is a validation failure; anything else
/// (syntax error, missing content type, oversized body) is `invalid_json`.
/// Both are reported as 400.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    let code = match rejection {
        JsonRejection::JsonDataError(_) => "validation_error",
        _ => "invalid_json",
    };
    json_error(StatusCode::BAD_REQUEST, code, rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}
