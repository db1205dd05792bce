/* src/cli/src/config.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// The slice of ekush.toml the CLI needs: how to reach the hosted backend.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
  pub backend: BackendSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSection {
  pub url: String,
  pub api_key: String,
}

/// Walk upward from `start` to find `ekush.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("ekush.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("ekush.toml not found (searched upward from {})", start.display());
    }
  }
}

/// Explicit path when given, upward discovery from cwd otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> Result<CliConfig> {
  let path = match explicit {
    Some(p) => p.to_path_buf(),
    None => find_config(Path::new("."))?,
  };
  load_config(&path)
}

pub fn load_config(path: &Path) -> Result<CliConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: CliConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  if config.backend.url.is_empty() {
    bail!("backend.url must not be empty in {}", path.display());
  }
  Ok(config)
}
