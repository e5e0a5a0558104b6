//! Custom request extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections are plain bad requests.
///
/// Axum's own `Json` answers malformed or mistyped bodies with 422; this
/// API reserves 422 for operations against the reserved default category,
/// so body rejections are reported as 400 instead.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
