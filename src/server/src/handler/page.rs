/* src/server/src/handler/page.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderName, header};
use ekush_content::{
  BusinessInfo, ContentRecord, Language, Product, ResolveContext, Testimonial, page_fallbacks,
  resolve_content, resolve_language, resolve_stat,
};
use ekush_store::StoreError;
use serde::Serialize;

use super::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub(crate) struct PageResponse {
  page: String,
  language: Language,
  sections: Vec<PageSection>,
}

#[derive(Serialize)]
pub(crate) struct PageSection {
  key: &'static str,
  title: String,
  body: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  stat: Option<StatBlock>,
}

#[derive(Serialize)]
struct StatBlock {
  value: u64,
  suffix: String,
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<String> {
  headers.get(name).and_then(|v| v.to_str().ok()).map(String::from)
}

/// Fully resolved copy for one page: every compiled-in section key merged with
/// whatever snapshot the backend returned. Never fails; an unreachable backend
/// serves the default copy.
pub(crate) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path(slug): Path<String>,
  Query(params): Query<HashMap<String, String>>,
  headers: HeaderMap,
) -> Json<PageResponse> {
  let language = resolve_language(&ResolveContext {
    query_lang: params.get("lang").cloned(),
    cookie_header: header_str(&headers, header::COOKIE),
    accept_language: header_str(&headers, header::ACCEPT_LANGUAGE),
  });

  let records = state.store.fetch_records(&slug).await;
  let snapshot = records.as_deref();

  let sections = page_fallbacks(&slug)
    .iter()
    .map(|fb| {
      let resolved = resolve_content(snapshot, fb.key, language, fb);
      let stat = fb.stat.map(|_| {
        let s = resolve_stat(snapshot, fb.key, language, fb);
        StatBlock { value: s.value, suffix: s.suffix }
      });
      PageSection { key: fb.key, title: resolved.title, body: resolved.body, stat }
    })
    .collect();

  Json(PageResponse { page: slug, language, sections })
}

/// Raw active rows for a page. Unlike the resolved page endpoint this one
/// surfaces backend failures: the admin screens need to tell "no rows" apart
/// from "backend down".
pub(crate) async fn handle_records(
  State(state): State<Arc<AppState>>,
  Path(slug): Path<String>,
) -> Result<Json<Vec<ContentRecord>>, ApiError> {
  match state.store.fetch_records(&slug).await {
    Some(rows) => Ok(Json(rows)),
    None => Err(StoreError::upstream("content backend unreachable").into()),
  }
}

pub(crate) async fn handle_testimonials(
  State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
  match state.store.fetch_testimonials().await {
    Some(mut rows) => {
      rows.retain(|t| t.is_active);
      rows.sort_by_key(|t| t.display_order);
      Ok(Json(rows))
    }
    None => Err(StoreError::upstream("content backend unreachable").into()),
  }
}

pub(crate) async fn handle_products(
  State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
  match state.store.fetch_products().await {
    Some(mut rows) => {
      rows.retain(|p| p.is_active);
      rows.sort_by_key(|p| p.display_order);
      Ok(Json(rows))
    }
    None => Err(StoreError::upstream("content backend unreachable").into()),
  }
}

pub(crate) async fn handle_business_info(
  State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BusinessInfo>>, ApiError> {
  match state.store.fetch_business_info().await {
    Some(rows) => Ok(Json(rows)),
    None => Err(StoreError::upstream("content backend unreachable").into()),
  }
}
