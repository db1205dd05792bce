/* src/content/src/resolve.rs */

use crate::fallback::FallbackEntry;
use crate::language::Language;
use crate::record::ContentRecord;

/// Output of a text resolution pass. Both fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
  pub title: String,
  pub body: String,
}

/// Output of a statistic resolution pass. `suffix` is either "+" or "".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStat {
  pub value: u64,
  pub suffix: String,
}

/// Merge one section's backend row (if any) with its compiled-in fallback.
///
/// Never fails: an absent snapshot, a missing or inactive row and empty text
/// fields all degrade to the fallback copy. Title and body fall back
/// independently of each other; a row may override just one of them.
pub fn resolve_content(
  records: Option<&[ContentRecord]>,
  section_key: &str,
  language: Language,
  fallback: &FallbackEntry,
) -> ResolvedContent {
  let matched = records.and_then(|rows| find_section(rows, section_key));

  let title = matched
    .and_then(|row| row.title_for(language))
    .unwrap_or(fallback.title.get(language))
    .to_string();
  let body = matched
    .and_then(|row| row.content_for(language))
    .unwrap_or(fallback.body.get(language))
    .to_string();

  ResolvedContent { title, body }
}

/// Statistic slots: the number is parsed out of the resolved title text,
/// ignoring every non-digit character ("1,000+" -> 1000). No digits means the
/// fallback's numeric value.
///
/// The "+" suffix is derived solely from the resolved text whenever a row
/// matched; the fallback's own suffix applies only on the no-match path. A
/// CMS override of "1000" therefore drops the "+" the default copy carries.
pub fn resolve_stat(
  records: Option<&[ContentRecord]>,
  section_key: &str,
  language: Language,
  fallback: &FallbackEntry,
) -> ResolvedStat {
  let default_value = fallback.stat.map_or(0, |s| s.value);

  let matched = records.and_then(|rows| find_section(rows, section_key));
  let Some(row) = matched else {
    let suffix = fallback.stat.map_or("", |s| s.suffix);
    return ResolvedStat { value: default_value, suffix: suffix.to_string() };
  };

  let text = row.title_for(language).unwrap_or(fallback.title.get(language));
  let digits: String = text.chars().filter(char::is_ascii_digit).collect();
  let value = if digits.is_empty() {
    default_value
  } else {
    digits.parse().unwrap_or(default_value)
  };
  let suffix = if text.trim_end().ends_with('+') { "+" } else { "" };

  ResolvedStat { value, suffix: suffix.to_string() }
}

/// First active row matching `section_key`, in fetch order. Duplicate keys
/// exist upstream; the first one wins, deterministically.
fn find_section<'a>(rows: &'a [ContentRecord], section_key: &str) -> Option<&'a ContentRecord> {
  rows.iter().find(|row| row.is_active && row.section_key == section_key)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fallback::{Bilingual, StatDefault};

  fn entry() -> FallbackEntry {
    FallbackEntry {
      key: "hero_title",
      title: Bilingual::new("Default title", "ডিফল্ট শিরোনাম"),
      body: Bilingual::new("Default body", "ডিফল্ট বিবরণ"),
      stat: None,
    }
  }

  fn stat_entry() -> FallbackEntry {
    FallbackEntry {
      key: "stat_clients",
      title: Bilingual::new("500", "৫০০"),
      body: Bilingual::new("Happy clients", "সন্তুষ্ট ক্লায়েন্ট"),
      stat: Some(StatDefault { value: 500, suffix: "+" }),
    }
  }

  fn row(section_key: &str) -> ContentRecord {
    ContentRecord {
      id: Some(1),
      page_slug: "home".into(),
      section_key: section_key.into(),
      title_en: None,
      title_bn: None,
      content_en: None,
      content_bn: None,
      display_order: 0,
      is_active: true,
      updated_at: None,
    }
  }

  #[test]
  fn absent_snapshot_uses_fallback() {
    let resolved = resolve_content(None, "hero_title", Language::En, &entry());
    assert_eq!(resolved.title, "Default title");
    assert_eq!(resolved.body, "Default body");
  }

  #[test]
  fn empty_snapshot_uses_fallback() {
    let resolved = resolve_content(Some(&[]), "hero_title", Language::Bn, &entry());
    assert_eq!(resolved.title, "ডিফল্ট শিরোনাম");
    assert_eq!(resolved.body, "ডিফল্ট বিবরণ");
  }

  #[test]
  fn no_matching_key_uses_fallback() {
    let rows = vec![ContentRecord { title_en: Some("Other".into()), ..row("other_key") }];
    let resolved = resolve_content(Some(&rows), "hero_title", Language::En, &entry());
    assert_eq!(resolved.title, "Default title");
  }

  #[test]
  fn matched_row_overrides_both_fields() {
    let rows = vec![ContentRecord {
      title_en: Some("CMS title".into()),
      content_en: Some("CMS body".into()),
      ..row("hero_title")
    }];
    let resolved = resolve_content(Some(&rows), "hero_title", Language::En, &entry());
    assert_eq!(resolved.title, "CMS title");
    assert_eq!(resolved.body, "CMS body");
  }

  #[test]
  fn title_and_body_fall_back_independently() {
    let rows = vec![ContentRecord { title_en: Some("CMS title".into()), ..row("hero_title") }];
    let resolved = resolve_content(Some(&rows), "hero_title", Language::En, &entry());
    assert_eq!(resolved.title, "CMS title");
    assert_eq!(resolved.body, "Default body");
  }

  #[test]
  fn empty_field_counts_as_missing() {
    let rows = vec![ContentRecord {
      title_en: Some(String::new()),
      content_en: Some("CMS body".into()),
      ..row("hero_title")
    }];
    let resolved = resolve_content(Some(&rows), "hero_title", Language::En, &entry());
    assert_eq!(resolved.title, "Default title");
    assert_eq!(resolved.body, "CMS body");
  }

  #[test]
  fn languages_resolve_independently() {
    let rows = vec![ContentRecord { title_bn: Some("সিএমএস শিরোনাম".into()), ..row("hero_title") }];
    let en = resolve_content(Some(&rows), "hero_title", Language::En, &entry());
    let bn = resolve_content(Some(&rows), "hero_title", Language::Bn, &entry());
    assert_eq!(en.title, "Default title");
    assert_eq!(bn.title, "সিএমএস শিরোনাম");
  }

  #[test]
  fn inactive_rows_are_skipped() {
    let rows = vec![
      ContentRecord { is_active: false, title_en: Some("Hidden".into()), ..row("hero_title") },
      ContentRecord { title_en: Some("Visible".into()), ..row("hero_title") },
    ];
    let resolved = resolve_content(Some(&rows), "hero_title", Language::En, &entry());
    assert_eq!(resolved.title, "Visible");
  }

  #[test]
  fn duplicate_keys_first_match_wins() {
    let rows = vec![
      ContentRecord { title_en: Some("First".into()), ..row("hero_title") },
      ContentRecord { title_en: Some("Second".into()), ..row("hero_title") },
    ];
    let resolved = resolve_content(Some(&rows), "hero_title", Language::En, &entry());
    assert_eq!(resolved.title, "First");
  }

  #[test]
  fn stat_no_match_uses_fallback_value_and_suffix() {
    let resolved = resolve_stat(None, "stat_clients", Language::En, &stat_entry());
    assert_eq!(resolved, ResolvedStat { value: 500, suffix: "+".into() });
  }

  #[test]
  fn stat_parses_embedded_digits() {
    let rows = vec![ContentRecord { title_en: Some("1,000+".into()), ..row("stat_clients") }];
    let resolved = resolve_stat(Some(&rows), "stat_clients", Language::En, &stat_entry());
    assert_eq!(resolved, ResolvedStat { value: 1000, suffix: "+".into() });
  }

  #[test]
  fn stat_without_digits_uses_fallback_value() {
    let rows = vec![ContentRecord { title_en: Some("About Us".into()), ..row("stat_clients") }];
    let resolved = resolve_stat(Some(&rows), "stat_clients", Language::En, &stat_entry());
    // No trailing "+" in "About Us", so the suffix is empty even though the
    // fallback's own default carries one.
    assert_eq!(resolved, ResolvedStat { value: 500, suffix: String::new() });
  }

  #[test]
  fn stat_override_without_plus_drops_suffix() {
    let rows = vec![ContentRecord { title_en: Some("750".into()), ..row("stat_clients") }];
    let resolved = resolve_stat(Some(&rows), "stat_clients", Language::En, &stat_entry());
    assert_eq!(resolved, ResolvedStat { value: 750, suffix: String::new() });
  }

  #[test]
  fn stat_idempotent() {
    let rows = vec![ContentRecord { title_en: Some("1,000+".into()), ..row("stat_clients") }];
    let a = resolve_stat(Some(&rows), "stat_clients", Language::En, &stat_entry());
    let b = resolve_stat(Some(&rows), "stat_clients", Language::En, &stat_entry());
    assert_eq!(a, b);
  }
}
