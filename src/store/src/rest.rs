/* src/store/src/rest.rs */

use ekush_content::{BusinessInfo, ContentRecord, Product, Testimonial};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::{BoxFuture, ContentStore};

const RECORDS: &str = "content_records";
const TESTIMONIALS: &str = "testimonials";
const PRODUCTS: &str = "products";
const BUSINESS_INFO: &str = "business_info";

/// Thin client for the hosted backend's row API (PostgREST filter/order
/// conventions) and its object storage API. All persistence and querying live
/// on the other side of this client.
#[derive(Clone)]
pub struct RestStore {
  client: reqwest::Client,
  base_url: String,
  api_key: String,
}

impl RestStore {
  pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { client: reqwest::Client::new(), base_url, api_key: api_key.into() }
  }

  fn table_url(&self, table: &str) -> String {
    format!("{}/rest/v1/{table}", self.base_url)
  }

  fn object_url(&self, bucket: &str, key: &str) -> String {
    format!("{}/storage/v1/object/{bucket}/{key}", self.base_url)
  }

  /// Public download URL for an uploaded object.
  fn public_url(&self, bucket: &str, key: &str) -> String {
    format!("{}/storage/v1/object/public/{bucket}/{key}", self.base_url)
  }

  fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    req.header("apikey", &self.api_key).bearer_auth(&self.api_key)
  }

  /// Read rows. Any transport or decode failure becomes `None`: reads feed
  /// the resolver, which degrades to fallback copy on an absent snapshot.
  async fn get_rows<T: DeserializeOwned>(
    &self,
    table: &str,
    query: &[(&str, String)],
  ) -> Option<Vec<T>> {
    let req = self.authed(self.client.get(self.table_url(table)).query(query));
    let resp = req.send().await.ok()?;
    if !resp.status().is_success() {
      return None;
    }
    resp.json().await.ok()
  }

  async fn insert_row<T: Serialize + DeserializeOwned>(
    &self,
    table: &str,
    row: &T,
  ) -> Result<T, StoreError> {
    let req = self
      .authed(self.client.post(self.table_url(table)))
      .header("Prefer", "return=representation")
      .json(row);
    Self::one_row(table, req).await
  }

  async fn upsert_row<T: Serialize + DeserializeOwned>(
    &self,
    table: &str,
    conflict_column: &str,
    row: &T,
  ) -> Result<T, StoreError> {
    let req = self
      .authed(self.client.post(self.table_url(table)))
      .query(&[("on_conflict", conflict_column)])
      .header("Prefer", "resolution=merge-duplicates,return=representation")
      .json(row);
    Self::one_row(table, req).await
  }

  async fn patch_row<T: Serialize + DeserializeOwned>(
    &self,
    table: &str,
    id: i64,
    row: &T,
  ) -> Result<T, StoreError> {
    let req = self
      .authed(self.client.patch(self.table_url(table)))
      .query(&[("id", format!("eq.{id}"))])
      .header("Prefer", "return=representation")
      .json(row);
    Self::one_row(table, req).await
  }

  async fn delete_row(&self, table: &str, id: i64) -> Result<(), StoreError> {
    let req = self
      .authed(self.client.delete(self.table_url(table)))
      .query(&[("id", format!("eq.{id}"))]);
    let resp = req.send().await.map_err(|e| StoreError::upstream(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
      return Err(StoreError::upstream(format!("delete from {table} returned HTTP {status}")));
    }
    Ok(())
  }

  /// Send a write request and decode the single affected row out of the
  /// `return=representation` response.
  async fn one_row<T: DeserializeOwned>(
    table: &str,
    req: reqwest::RequestBuilder,
  ) -> Result<T, StoreError> {
    let resp = req.send().await.map_err(|e| StoreError::upstream(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
      return Err(StoreError::upstream(format!("write to {table} returned HTTP {status}")));
    }
    let mut rows: Vec<T> =
      resp.json().await.map_err(|e| StoreError::upstream(e.to_string()))?;
    rows.pop().ok_or_else(|| StoreError::upstream(format!("write to {table} returned no row")))
  }
}

fn require_id(id: Option<i64>, what: &str) -> Result<i64, StoreError> {
  id.ok_or_else(|| StoreError::validation(format!("{what} update requires an id")))
}

impl ContentStore for RestStore {
  fn fetch_records(&self, page_slug: &str) -> BoxFuture<Option<Vec<ContentRecord>>> {
    let this = self.clone();
    let slug = page_slug.to_string();
    Box::pin(async move {
      this
        .get_rows(RECORDS, &[
          ("page_slug", format!("eq.{slug}")),
          ("is_active", "eq.true".to_string()),
          ("order", "display_order.asc".to_string()),
        ])
        .await
    })
  }

  fn create_record(&self, row: ContentRecord) -> BoxFuture<Result<ContentRecord, StoreError>> {
    let this = self.clone();
    Box::pin(async move { this.insert_row(RECORDS, &row).await })
  }

  fn update_record(&self, row: ContentRecord) -> BoxFuture<Result<ContentRecord, StoreError>> {
    let this = self.clone();
    Box::pin(async move {
      let id = require_id(row.id, "content record")?;
      this.patch_row(RECORDS, id, &row).await
    })
  }

  fn delete_record(&self, id: i64) -> BoxFuture<Result<(), StoreError>> {
    let this = self.clone();
    Box::pin(async move { this.delete_row(RECORDS, id).await })
  }

  fn fetch_testimonials(&self) -> BoxFuture<Option<Vec<Testimonial>>> {
    let this = self.clone();
    Box::pin(async move {
      this.get_rows(TESTIMONIALS, &[("order", "display_order.asc".to_string())]).await
    })
  }

  fn create_testimonial(&self, row: Testimonial) -> BoxFuture<Result<Testimonial, StoreError>> {
    let this = self.clone();
    Box::pin(async move { this.insert_row(TESTIMONIALS, &row).await })
  }

  fn update_testimonial(&self, row: Testimonial) -> BoxFuture<Result<Testimonial, StoreError>> {
    let this = self.clone();
    Box::pin(async move {
      let id = require_id(row.id, "testimonial")?;
      this.patch_row(TESTIMONIALS, id, &row).await
    })
  }

  fn delete_testimonial(&self, id: i64) -> BoxFuture<Result<(), StoreError>> {
    let this = self.clone();
    Box::pin(async move { this.delete_row(TESTIMONIALS, id).await })
  }

  fn fetch_products(&self) -> BoxFuture<Option<Vec<Product>>> {
    let this = self.clone();
    Box::pin(async move {
      this.get_rows(PRODUCTS, &[("order", "display_order.asc".to_string())]).await
    })
  }

  fn create_product(&self, row: Product) -> BoxFuture<Result<Product, StoreError>> {
    let this = self.clone();
    Box::pin(async move { this.insert_row(PRODUCTS, &row).await })
  }

  fn update_product(&self, row: Product) -> BoxFuture<Result<Product, StoreError>> {
    let this = self.clone();
    Box::pin(async move {
      let id = require_id(row.id, "product")?;
      this.patch_row(PRODUCTS, id, &row).await
    })
  }

  fn delete_product(&self, id: i64) -> BoxFuture<Result<(), StoreError>> {
    let this = self.clone();
    Box::pin(async move { this.delete_row(PRODUCTS, id).await })
  }

  fn fetch_business_info(&self) -> BoxFuture<Option<Vec<BusinessInfo>>> {
    let this = self.clone();
    Box::pin(async move {
      this.get_rows(BUSINESS_INFO, &[("order", "info_key.asc".to_string())]).await
    })
  }

  fn upsert_business_info(&self, row: BusinessInfo) -> BoxFuture<Result<BusinessInfo, StoreError>> {
    let this = self.clone();
    Box::pin(async move { this.upsert_row(BUSINESS_INFO, "info_key", &row).await })
  }

  fn upload_object(
    &self,
    bucket: &str,
    key: &str,
    content_type: &str,
    bytes: Vec<u8>,
  ) -> BoxFuture<Result<String, StoreError>> {
    let this = self.clone();
    let url = self.object_url(bucket, key);
    let public = self.public_url(bucket, key);
    let content_type = content_type.to_string();
    Box::pin(async move {
      let req = this
        .authed(this.client.post(&url))
        .header("Content-Type", content_type)
        .body(bytes);
      let resp = req.send().await.map_err(|e| StoreError::upstream(e.to_string()))?;
      let status = resp.status();
      if !status.is_success() {
        return Err(StoreError::upstream(format!("object upload returned HTTP {status}")));
      }
      Ok(public)
    })
  }

  fn delete_object(&self, bucket: &str, key: &str) -> BoxFuture<Result<(), StoreError>> {
    let this = self.clone();
    let url = self.object_url(bucket, key);
    Box::pin(async move {
      let resp = this
        .authed(this.client.delete(&url))
        .send()
        .await
        .map_err(|e| StoreError::upstream(e.to_string()))?;
      let status = resp.status();
      if !status.is_success() {
        return Err(StoreError::upstream(format!("object delete returned HTTP {status}")));
      }
      Ok(())
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_url_trailing_slash_trimmed() {
    let store = RestStore::new("https://backend.example.com/", "key");
    assert_eq!(store.table_url("products"), "https://backend.example.com/rest/v1/products");
  }

  #[test]
  fn object_urls() {
    let store = RestStore::new("https://backend.example.com", "key");
    assert_eq!(
      store.object_url("site-images", "products/1a2b3c4d.png"),
      "https://backend.example.com/storage/v1/object/site-images/products/1a2b3c4d.png",
    );
    assert_eq!(
      store.public_url("site-images", "products/1a2b3c4d.png"),
      "https://backend.example.com/storage/v1/object/public/site-images/products/1a2b3c4d.png",
    );
  }

  #[test]
  fn require_id_rejects_missing() {
    let err = require_id(None, "product").unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(require_id(Some(7), "product").unwrap(), 7);
  }
}
