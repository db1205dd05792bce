/* src/server/src/handler/upload.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use ekush_content::Product;
use ekush_store::StoreError;
use sha2::{Digest, Sha256};

use super::{AppState, require_admin};
use crate::error::ApiError;

/// Content-addressed object key: first 4 bytes of SHA-256 over the bytes,
/// hex-encoded, with the original extension when it looks sane. Re-uploading
/// identical bytes lands on the same key instead of piling up duplicates.
fn object_key(file_name: &str, bytes: &[u8]) -> String {
  let digest = Sha256::digest(bytes);
  let hash = hex::encode(&digest[..4]);
  match file_name.rsplit_once('.') {
    Some((_, ext))
      if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
    {
      format!("{hash}.{}", ext.to_ascii_lowercase())
    }
    _ => hash,
  }
}

/// Image upload with validation and cleanup.
///
/// Multipart fields: `file` (required) and `product` (optional JSON). When a
/// product is supplied the upload and the row write are one operation from the
/// admin panel's point of view: a failed row write deletes the object that was
/// just stored so storage holds no orphans.
pub(crate) async fn handle_upload(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_admin(&state, &headers)?;

  let mut file: Option<(String, String, Vec<u8>)> = None;
  let mut product: Option<Product> = None;

  while let Some(field) =
    multipart.next_field().await.map_err(|e| StoreError::validation(e.to_string()))?
  {
    match field.name() {
      Some("file") => {
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let bytes =
          field.bytes().await.map_err(|e| StoreError::validation(e.to_string()))?;
        file = Some((file_name, content_type, bytes.to_vec()));
      }
      Some("product") => {
        let text = field.text().await.map_err(|e| StoreError::validation(e.to_string()))?;
        let parsed = serde_json::from_str(&text)
          .map_err(|e| StoreError::validation(format!("product field: {e}")))?;
        product = Some(parsed);
      }
      _ => {}
    }
  }

  let Some((file_name, content_type, bytes)) = file else {
    return Err(StoreError::validation("multipart body had no \"file\" field").into());
  };

  if !state.allowed_types.iter().any(|t| t == &content_type) {
    return Err(
      StoreError::validation(format!("content type \"{content_type}\" is not allowed")).into(),
    );
  }
  if bytes.is_empty() {
    return Err(StoreError::validation("uploaded file is empty").into());
  }
  if bytes.len() as u64 > state.max_upload_bytes {
    return Err(
      StoreError::validation(format!(
        "file is {} bytes, limit is {}",
        bytes.len(),
        state.max_upload_bytes
      ))
      .into(),
    );
  }

  let key = object_key(&file_name, &bytes);
  let url = state.store.upload_object(&state.bucket, &key, &content_type, bytes).await?;
  tracing::info!(%key, "object uploaded");

  let Some(mut product) = product else {
    return Ok(Json(serde_json::json!({ "ok": true, "key": key, "url": url })));
  };

  product.image_url = Some(url.clone());
  match state.store.create_product(product).await {
    Ok(created) => {
      Ok(Json(serde_json::json!({ "ok": true, "key": key, "url": url, "product": created })))
    }
    Err(err) => {
      // Roll back the orphaned object before surfacing the write failure
      if let Err(cleanup) = state.store.delete_object(&state.bucket, &key).await {
        tracing::warn!(error = %cleanup, %key, "failed to remove orphaned upload");
      }
      Err(err.into())
    }
  }
}
