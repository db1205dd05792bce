/* src/server/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ekush_store::StoreError;

/// Newtype wrapper to implement `IntoResponse` for `StoreError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for
/// StoreError` when both types are foreign to this crate.
pub(crate) struct ApiError(pub StoreError);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<StoreError> for ApiError {
  fn from(err: StoreError) -> Self {
    Self(err)
  }
}
