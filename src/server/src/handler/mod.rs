/* src/server/src/handler/mod.rs */

mod admin;
mod page;
mod upload;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderMap;
use axum::routing::{delete, get, post, put};
use ekush_store::{ContentStore, StoreError};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::EkushConfig;
use crate::error::ApiError;

pub struct AppState {
  pub store: Arc<dyn ContentStore>,
  pub admin_token: Option<String>,
  pub bucket: String,
  pub max_upload_bytes: u64,
  pub allowed_types: Vec<String>,
}

impl AppState {
  pub fn new(store: Arc<dyn ContentStore>, config: &EkushConfig) -> Self {
    Self {
      store,
      admin_token: config.server.admin_token.clone(),
      bucket: config.backend.bucket.clone(),
      max_upload_bytes: config.upload.max_bytes,
      allowed_types: config.upload.allowed_types.clone(),
    }
  }
}

pub fn build_router(state: Arc<AppState>) -> Router {
  // Room for the multipart envelope around the payload itself
  let body_limit = state.max_upload_bytes as usize + 64 * 1024;

  Router::new()
    // public surface
    .route("/api/page/{slug}", get(page::handle_page))
    .route("/api/records/{slug}", get(page::handle_records))
    .route("/api/testimonials", get(page::handle_testimonials))
    .route("/api/products", get(page::handle_products))
    .route("/api/business-info", get(page::handle_business_info))
    // admin surface (shared-token guard)
    .route("/api/admin/records", post(admin::create_record).put(admin::update_record))
    .route("/api/admin/records/{id}", delete(admin::delete_record))
    .route("/api/admin/testimonials", post(admin::create_testimonial).put(admin::update_testimonial))
    .route("/api/admin/testimonials/{id}", delete(admin::delete_testimonial))
    .route("/api/admin/products", post(admin::create_product).put(admin::update_product))
    .route("/api/admin/products/{id}", delete(admin::delete_product))
    .route("/api/admin/business-info", put(admin::upsert_business_info))
    .route("/api/admin/upload", post(upload::handle_upload))
    .layer(DefaultBodyLimit::max(body_limit))
    // The marketing frontend is served from its own origin
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Shared-token guard for the admin surface. No configured token means the
/// admin API is disabled outright; identity beyond this lives in the hosted
/// backend's own auth.
pub(crate) fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
  let Some(ref expected) = state.admin_token else {
    return Err(StoreError::forbidden("admin API is disabled").into());
  };

  let supplied = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "));

  match supplied {
    Some(token) if token == expected => Ok(()),
    _ => Err(StoreError::unauthorized("missing or invalid admin token").into()),
  }
}
