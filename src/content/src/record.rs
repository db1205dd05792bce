/* src/content/src/record.rs */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One managed content row for a page section, as stored in the hosted
/// backend. The four text fields are independently nullable: the CMS lets an
/// editor override just a title, just a body, or either language alone.
///
/// `(page_slug, section_key)` is not unique at the storage layer. Resolution
/// takes the first match in fetch order rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub page_slug: String,
  pub section_key: String,
  #[serde(default)]
  pub title_en: Option<String>,
  #[serde(default)]
  pub title_bn: Option<String>,
  #[serde(default)]
  pub content_en: Option<String>,
  #[serde(default)]
  pub content_bn: Option<String>,
  #[serde(default)]
  pub display_order: i32,
  #[serde(default = "default_active")]
  pub is_active: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
  true
}

impl ContentRecord {
  /// Language-specific title. Empty strings count as missing.
  pub fn title_for(&self, language: Language) -> Option<&str> {
    let field = match language {
      Language::En => self.title_en.as_deref(),
      Language::Bn => self.title_bn.as_deref(),
    };
    non_empty(field)
  }

  /// Language-specific body. Empty strings count as missing.
  pub fn content_for(&self, language: Language) -> Option<&str> {
    let field = match language {
      Language::En => self.content_en.as_deref(),
      Language::Bn => self.content_bn.as_deref(),
    };
    non_empty(field)
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|s| !s.is_empty())
}

/// A client quote shown on the trust sections and managed from the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub name_en: String,
  #[serde(default)]
  pub name_bn: Option<String>,
  #[serde(default)]
  pub role_en: Option<String>,
  #[serde(default)]
  pub role_bn: Option<String>,
  pub quote_en: String,
  #[serde(default)]
  pub quote_bn: Option<String>,
  /// 1..=5 stars.
  #[serde(default = "default_rating")]
  pub rating: i16,
  #[serde(default)]
  pub display_order: i32,
  #[serde(default = "default_active")]
  pub is_active: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

fn default_rating() -> i16 {
  5
}

/// A product or service card. `status` is free text classified into a badge
/// severity by the status module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub name_en: String,
  #[serde(default)]
  pub name_bn: Option<String>,
  #[serde(default)]
  pub description_en: Option<String>,
  #[serde(default)]
  pub description_bn: Option<String>,
  #[serde(default)]
  pub status: String,
  #[serde(default)]
  pub image_url: Option<String>,
  #[serde(default)]
  pub display_order: i32,
  #[serde(default = "default_active")]
  pub is_active: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// Key/value business facts (address, phone, hours), bilingual values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub info_key: String,
  pub value_en: String,
  #[serde(default)]
  pub value_bn: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}
