/* src/cli/src/check.rs */

use std::path::Path;

use anyhow::Result;
use ekush_content::{ContentRecord, FallbackEntry, PAGES, page_fallbacks};
use ekush_store::{ContentStore, RestStore};

use crate::config;
use crate::ui;

/// Fallback keys with no backend row, and backend section keys with no
/// fallback entry. Rows arrive ordered by display_order, so duplicate keys
/// need not be adjacent.
fn drift_report<'a>(
  fallbacks: &[FallbackEntry],
  rows: &'a [ContentRecord],
) -> (Vec<&'static str>, Vec<&'a str>) {
  let missing: Vec<&str> = fallbacks
    .iter()
    .filter(|entry| !rows.iter().any(|r| r.section_key == entry.key))
    .map(|entry| entry.key)
    .collect();
  let mut unknown: Vec<&str> = rows
    .iter()
    .filter(|r| !fallbacks.iter().any(|entry| entry.key == r.section_key))
    .map(|r| r.section_key.as_str())
    .collect();
  unknown.sort_unstable();
  unknown.dedup();
  (missing, unknown)
}

/// Fallback tables and backend rows are kept in sync by hand; this reports
/// the drift in both directions.
pub async fn run(config_path: Option<&Path>) -> Result<()> {
  ui::banner("check");

  let config = config::resolve_config(config_path)?;
  let store = RestStore::new(&config.backend.url, &config.backend.api_key);

  let mut drift = 0usize;
  for page in PAGES {
    let Some(rows) = store.fetch_records(page).await else {
      ui::fail(&format!("{page}: backend unreachable"));
      anyhow::bail!("could not fetch content from {}", config.backend.url);
    };

    let fallbacks = page_fallbacks(page);
    let (missing, unknown) = drift_report(fallbacks, &rows);

    if missing.is_empty() && unknown.is_empty() {
      ui::ok(&format!("{page}: {} sections in sync", fallbacks.len()));
    } else {
      ui::warn(&format!("{page}: drift"));
      for key in &missing {
        ui::detail(&format!("no backend row for \"{key}\" (fallback copy will show)"));
      }
      for key in &unknown {
        ui::detail(&format!("backend row \"{key}\" has no fallback entry"));
      }
      drift += missing.len() + unknown.len();
    }
  }

  ui::blank();
  if drift == 0 {
    ui::ok("all pages in sync");
  } else {
    ui::warn(&format!("{drift} drifted sections"));
  }
  Ok(())
}
