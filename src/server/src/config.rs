/* src/server/src/config.rs */

use std::path::Path;

use serde::Deserialize;

type ConfigError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Deserialize)]
pub struct EkushConfig {
  #[serde(default)]
  pub server: ServerSection,
  pub backend: BackendSection,
  #[serde(default)]
  pub upload: UploadSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  /// Shared secret for /api/admin/*. Absent means the admin API is disabled.
  #[serde(default)]
  pub admin_token: Option<String>,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port(), admin_token: None }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSection {
  pub url: String,
  pub api_key: String,
  #[serde(default = "default_bucket")]
  pub bucket: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSection {
  #[serde(default = "default_max_bytes")]
  pub max_bytes: u64,
  #[serde(default = "default_allowed_types")]
  pub allowed_types: Vec<String>,
}

impl Default for UploadSection {
  fn default() -> Self {
    Self { max_bytes: default_max_bytes(), allowed_types: default_allowed_types() }
  }
}

fn default_port() -> u16 {
  4000
}

fn default_bucket() -> String {
  "site-images".to_string()
}

fn default_max_bytes() -> u64 {
  5_000_000
}

fn default_allowed_types() -> Vec<String> {
  ["image/png", "image/jpeg", "image/webp", "image/svg+xml"]
    .iter()
    .map(ToString::to_string)
    .collect()
}

impl EkushConfig {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path)
      .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let config: Self = toml::from_str(&content)
      .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.backend.url.is_empty() {
      return Err("backend.url must not be empty".into());
    }
    if !self.backend.url.starts_with("http://") && !self.backend.url.starts_with("https://") {
      return Err(format!("backend.url must be http(s), got \"{}\"", self.backend.url).into());
    }
    if self.backend.api_key.is_empty() {
      return Err("backend.api_key must not be empty".into());
    }
    if self.upload.max_bytes == 0 {
      return Err("upload.max_bytes must be positive".into());
    }
    if self.upload.allowed_types.is_empty() {
      return Err("upload.allowed_types must not be empty".into());
    }
    Ok(())
  }
}
