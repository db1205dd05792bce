/* src/cli/src/pages.rs */

use std::path::Path;

use anyhow::Result;
use ekush_content::{Language, PAGES, page_fallbacks, resolve_content, resolve_stat};
use ekush_store::{ContentStore, RestStore};

use crate::config;
use crate::ui::{self, DIM, RESET};

/// Terminal preview of a page's resolved copy, both languages side by side.
pub async fn run(slug: &str, config_path: Option<&Path>) -> Result<()> {
  ui::banner("pages");

  let fallbacks = page_fallbacks(slug);
  if fallbacks.is_empty() {
    anyhow::bail!("unknown page \"{slug}\" (known: {})", PAGES.join(", "));
  }

  let config = config::resolve_config(config_path)?;
  let store = RestStore::new(&config.backend.url, &config.backend.api_key);

  let records = store.fetch_records(slug).await;
  if records.is_none() {
    ui::warn("backend unreachable, showing fallback copy");
  }
  let snapshot = records.as_deref();

  for entry in fallbacks {
    ui::arrow(entry.key);
    for language in Language::ALL {
      if entry.stat.is_some() {
        let stat = resolve_stat(snapshot, entry.key, language, entry);
        let text = resolve_content(snapshot, entry.key, language, entry);
        ui::detail(&format!("{language}: {}{}  {DIM}{}{RESET}", stat.value, stat.suffix, text.body));
      } else {
        let text = resolve_content(snapshot, entry.key, language, entry);
        ui::detail(&format!("{language}: {}", text.title));
        ui::detail(&format!("    {DIM}{}{RESET}", text.body));
      }
    }
  }

  Ok(())
}
