/* src/store/src/memory.rs */

use std::collections::HashMap;
use std::future::ready;
use std::sync::Mutex;

use ekush_content::{BusinessInfo, ContentRecord, Product, Testimonial};

use crate::error::StoreError;
use crate::{BoxFuture, ContentStore};

/// In-memory store for tests and offline development. Behaves like the hosted
/// backend in the ways the core cares about: fetch order, id assignment, and
/// failure injection for the degraded paths.
#[derive(Default)]
pub struct MemoryStore {
  inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
  records: Vec<ContentRecord>,
  testimonials: Vec<Testimonial>,
  products: Vec<Product>,
  business_info: Vec<BusinessInfo>,
  objects: HashMap<String, Vec<u8>>,
  next_id: i64,
  offline: bool,
  fail_writes: bool,
}

impl Inner {
  fn assign_id(&mut self) -> i64 {
    self.next_id += 1;
    self.next_id
  }
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Simulate an unreachable backend: every fetch returns `None`.
  pub fn set_offline(&self, offline: bool) {
    self.lock().offline = offline;
  }

  /// Simulate row-write failures while leaving reads and storage working.
  pub fn set_fail_writes(&self, fail: bool) {
    self.lock().fail_writes = fail;
  }

  pub fn push_record(&self, row: ContentRecord) {
    self.lock().records.push(row);
  }

  pub fn push_testimonial(&self, row: Testimonial) {
    self.lock().testimonials.push(row);
  }

  pub fn push_product(&self, row: Product) {
    self.lock().products.push(row);
  }

  /// Number of stored objects, for upload/cleanup assertions.
  pub fn object_count(&self) -> usize {
    self.lock().objects.len()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
    // A poisoned lock only happens after a panic in another test thread;
    // recover the data rather than cascading.
    self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
  }

  fn write_guard(inner: &Inner) -> Result<(), StoreError> {
    if inner.fail_writes {
      return Err(StoreError::upstream("backend rejected the write"));
    }
    Ok(())
  }
}

fn object_path(bucket: &str, key: &str) -> String {
  format!("{bucket}/{key}")
}

fn done<T: Send + 'static>(value: T) -> BoxFuture<T> {
  Box::pin(ready(value))
}

impl ContentStore for MemoryStore {
  fn fetch_records(&self, page_slug: &str) -> BoxFuture<Option<Vec<ContentRecord>>> {
    let inner = self.lock();
    let result = if inner.offline {
      None
    } else {
      let mut rows: Vec<ContentRecord> =
        inner.records.iter().filter(|r| r.page_slug == page_slug && r.is_active).cloned().collect();
      rows.sort_by_key(|r| r.display_order);
      Some(rows)
    };
    done(result)
  }

  fn create_record(&self, mut row: ContentRecord) -> BoxFuture<Result<ContentRecord, StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).map(|()| {
      row.id = Some(inner.assign_id());
      inner.records.push(row.clone());
      row
    });
    done(result)
  }

  fn update_record(&self, row: ContentRecord) -> BoxFuture<Result<ContentRecord, StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).and_then(|()| {
      let existing = inner.records.iter_mut().find(|r| r.id == row.id && row.id.is_some());
      match existing {
        Some(slot) => {
          *slot = row.clone();
          Ok(row)
        }
        None => Err(StoreError::not_found("content record not found")),
      }
    });
    done(result)
  }

  fn delete_record(&self, id: i64) -> BoxFuture<Result<(), StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).map(|()| {
      inner.records.retain(|r| r.id != Some(id));
    });
    done(result)
  }

  fn fetch_testimonials(&self) -> BoxFuture<Option<Vec<Testimonial>>> {
    let inner = self.lock();
    let result = if inner.offline { None } else { Some(inner.testimonials.clone()) };
    done(result)
  }

  fn create_testimonial(&self, mut row: Testimonial) -> BoxFuture<Result<Testimonial, StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).map(|()| {
      row.id = Some(inner.assign_id());
      inner.testimonials.push(row.clone());
      row
    });
    done(result)
  }

  fn update_testimonial(&self, row: Testimonial) -> BoxFuture<Result<Testimonial, StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).and_then(|()| {
      let existing = inner.testimonials.iter_mut().find(|r| r.id == row.id && row.id.is_some());
      match existing {
        Some(slot) => {
          *slot = row.clone();
          Ok(row)
        }
        None => Err(StoreError::not_found("testimonial not found")),
      }
    });
    done(result)
  }

  fn delete_testimonial(&self, id: i64) -> BoxFuture<Result<(), StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).map(|()| {
      inner.testimonials.retain(|r| r.id != Some(id));
    });
    done(result)
  }

  fn fetch_products(&self) -> BoxFuture<Option<Vec<Product>>> {
    let inner = self.lock();
    let result = if inner.offline { None } else { Some(inner.products.clone()) };
    done(result)
  }

  fn create_product(&self, mut row: Product) -> BoxFuture<Result<Product, StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).map(|()| {
      row.id = Some(inner.assign_id());
      inner.products.push(row.clone());
      row
    });
    done(result)
  }

  fn update_product(&self, row: Product) -> BoxFuture<Result<Product, StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).and_then(|()| {
      let existing = inner.products.iter_mut().find(|r| r.id == row.id && row.id.is_some());
      match existing {
        Some(slot) => {
          *slot = row.clone();
          Ok(row)
        }
        None => Err(StoreError::not_found("product not found")),
      }
    });
    done(result)
  }

  fn delete_product(&self, id: i64) -> BoxFuture<Result<(), StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).map(|()| {
      inner.products.retain(|r| r.id != Some(id));
    });
    done(result)
  }

  fn fetch_business_info(&self) -> BoxFuture<Option<Vec<BusinessInfo>>> {
    let inner = self.lock();
    let result = if inner.offline { None } else { Some(inner.business_info.clone()) };
    done(result)
  }

  fn upsert_business_info(&self, mut row: BusinessInfo) -> BoxFuture<Result<BusinessInfo, StoreError>> {
    let mut inner = self.lock();
    let result = Self::write_guard(&inner).map(|()| {
      match inner.business_info.iter_mut().find(|r| r.info_key == row.info_key) {
        Some(slot) => {
          row.id = slot.id;
          *slot = row.clone();
        }
        None => {
          row.id = Some(inner.assign_id());
          inner.business_info.push(row.clone());
        }
      }
      row
    });
    done(result)
  }

  fn upload_object(
    &self,
    bucket: &str,
    key: &str,
    _content_type: &str,
    bytes: Vec<u8>,
  ) -> BoxFuture<Result<String, StoreError>> {
    let mut inner = self.lock();
    let path = object_path(bucket, key);
    inner.objects.insert(path.clone(), bytes);
    done(Ok(format!("memory://{path}")))
  }

  fn delete_object(&self, bucket: &str, key: &str) -> BoxFuture<Result<(), StoreError>> {
    let mut inner = self.lock();
    let result = match inner.objects.remove(&object_path(bucket, key)) {
      Some(_) => Ok(()),
      None => Err(StoreError::not_found(format!("no object at {bucket}/{key}"))),
    };
    done(result)
  }
}
