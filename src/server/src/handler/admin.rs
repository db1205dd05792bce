/* src/server/src/handler/admin.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use ekush_content::{BusinessInfo, ContentRecord, Product, Testimonial};

use super::{AppState, require_admin};
use crate::error::ApiError;

pub(crate) async fn create_record(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(row): Json<ContentRecord>,
) -> Result<Json<ContentRecord>, ApiError> {
  require_admin(&state, &headers)?;
  let created = state.store.create_record(row).await?;
  tracing::info!(page = %created.page_slug, key = %created.section_key, "content record created");
  Ok(Json(created))
}

pub(crate) async fn update_record(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(row): Json<ContentRecord>,
) -> Result<Json<ContentRecord>, ApiError> {
  require_admin(&state, &headers)?;
  Ok(Json(state.store.update_record(row).await?))
}

pub(crate) async fn delete_record(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_admin(&state, &headers)?;
  state.store.delete_record(id).await?;
  Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) async fn create_testimonial(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(row): Json<Testimonial>,
) -> Result<Json<Testimonial>, ApiError> {
  require_admin(&state, &headers)?;
  Ok(Json(state.store.create_testimonial(row).await?))
}

pub(crate) async fn update_testimonial(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(row): Json<Testimonial>,
) -> Result<Json<Testimonial>, ApiError> {
  require_admin(&state, &headers)?;
  Ok(Json(state.store.update_testimonial(row).await?))
}

pub(crate) async fn delete_testimonial(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_admin(&state, &headers)?;
  state.store.delete_testimonial(id).await?;
  Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) async fn create_product(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(row): Json<Product>,
) -> Result<Json<Product>, ApiError> {
  require_admin(&state, &headers)?;
  Ok(Json(state.store.create_product(row).await?))
}

pub(crate) async fn update_product(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(row): Json<Product>,
) -> Result<Json<Product>, ApiError> {
  require_admin(&state, &headers)?;
  Ok(Json(state.store.update_product(row).await?))
}

pub(crate) async fn delete_product(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_admin(&state, &headers)?;
  state.store.delete_product(id).await?;
  Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) async fn upsert_business_info(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(row): Json<BusinessInfo>,
) -> Result<Json<BusinessInfo>, ApiError> {
  require_admin(&state, &headers)?;
  Ok(Json(state.store.upsert_business_info(row).await?))
}
