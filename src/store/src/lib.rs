/* src/store/src/lib.rs */

pub mod error;
pub mod memory;
pub mod rest;

use std::future::Future;
use std::pin::Pin;

use ekush_content::{BusinessInfo, ContentRecord, Product, Testimonial};

pub use error::StoreError;
pub use memory::MemoryStore;
pub use rest::RestStore;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Narrow capability surface over the hosted backend.
///
/// Reads return `None` on transport failure so the presentation layer can
/// degrade to fallback copy instead of erroring; writes surface a
/// `StoreError`. Implementations must not panic.
pub trait ContentStore: Send + Sync {
  // -- page content --
  /// Active rows for a page, ordered by display_order. `None` means the
  /// request failed (the resolver treats that as an absent snapshot).
  fn fetch_records(&self, page_slug: &str) -> BoxFuture<Option<Vec<ContentRecord>>>;
  fn create_record(&self, row: ContentRecord) -> BoxFuture<Result<ContentRecord, StoreError>>;
  fn update_record(&self, row: ContentRecord) -> BoxFuture<Result<ContentRecord, StoreError>>;
  fn delete_record(&self, id: i64) -> BoxFuture<Result<(), StoreError>>;

  // -- testimonials --
  fn fetch_testimonials(&self) -> BoxFuture<Option<Vec<Testimonial>>>;
  fn create_testimonial(&self, row: Testimonial) -> BoxFuture<Result<Testimonial, StoreError>>;
  fn update_testimonial(&self, row: Testimonial) -> BoxFuture<Result<Testimonial, StoreError>>;
  fn delete_testimonial(&self, id: i64) -> BoxFuture<Result<(), StoreError>>;

  // -- products --
  fn fetch_products(&self) -> BoxFuture<Option<Vec<Product>>>;
  fn create_product(&self, row: Product) -> BoxFuture<Result<Product, StoreError>>;
  fn update_product(&self, row: Product) -> BoxFuture<Result<Product, StoreError>>;
  fn delete_product(&self, id: i64) -> BoxFuture<Result<(), StoreError>>;

  // -- business info --
  fn fetch_business_info(&self) -> BoxFuture<Option<Vec<BusinessInfo>>>;
  fn upsert_business_info(&self, row: BusinessInfo) -> BoxFuture<Result<BusinessInfo, StoreError>>;

  // -- object storage --
  /// Upload bytes under `bucket/key`, returning the public URL.
  fn upload_object(
    &self,
    bucket: &str,
    key: &str,
    content_type: &str,
    bytes: Vec<u8>,
  ) -> BoxFuture<Result<String, StoreError>>;
  fn delete_object(&self, bucket: &str, key: &str) -> BoxFuture<Result<(), StoreError>>;
}
